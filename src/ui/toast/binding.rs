// SPDX-License-Identifier: MPL-2.0
//! Caller-owned values shared with a toast controller.
//!
//! A [`Binding`] wraps a value the host application owns (a visibility flag or
//! an optional toast payload) and counts every assignment. Controllers remember
//! the last revision they observed, so re-assigning an equal value is still
//! seen as a change while an untouched binding is not.

/// Mutable cell with a revision counter.
#[derive(Debug, Clone, Default)]
pub struct Binding<T> {
    value: T,
    revision: u64,
}

impl<T> Binding<T> {
    /// Wraps an initial value at revision zero.
    pub fn new(value: T) -> Self {
        Self { value, revision: 0 }
    }

    /// Returns the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Assigns a new value and bumps the revision, even if the value is equal.
    pub fn set(&mut self, value: T) {
        self.replace(value);
    }

    /// Assigns a new value and returns the previous one.
    pub fn replace(&mut self, value: T) -> T {
        self.revision = self.revision.wrapping_add(1);
        std::mem::replace(&mut self.value, value)
    }

    /// Number of assignments since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T> Binding<Option<T>> {
    /// Clears the value, returning what was there.
    pub fn take(&mut self) -> Option<T> {
        self.replace(None)
    }

    #[must_use]
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }
}

impl Binding<bool> {
    /// Flips the flag.
    pub fn toggle(&mut self) {
        let next = !self.value;
        self.set(next);
    }
}
