// SPDX-License-Identifier: MPL-2.0
//! Single-shot, cancellable dismissal timer.
//!
//! The timer never hides anything by itself. [`DismissTimer::schedule`] hands
//! out a fresh [`TimerToken`] and [`DismissTimer::task`] turns the schedule
//! into an abortable Iced task that resolves to that token once the delay has
//! elapsed. When the token comes back, [`DismissTimer::fire`] only accepts it
//! if it is still the pending one: a cancelled or superseded timer whose
//! message is already queued is ignored.

use iced::task::{self, Task};
use std::fmt;
use std::time::Duration;

/// Identifies one scheduled dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A dismissal that has been scheduled but not yet spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub token: TimerToken,
    pub after: Duration,
}

struct Pending {
    token: TimerToken,
    abort: Option<task::Handle>,
}

/// Holds at most one outstanding dismissal.
#[derive(Default)]
pub struct DismissTimer {
    generation: u64,
    pending: Option<Pending>,
}

impl fmt::Debug for DismissTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissTimer")
            .field("generation", &self.generation)
            .field("pending", &self.pending.as_ref().map(|p| p.token))
            .finish()
    }
}

impl DismissTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending dismissal and schedules a new one.
    pub fn schedule(&mut self, after: Duration) -> Scheduled {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.pending = Some(Pending { token, abort: None });
        Scheduled { token, after }
    }

    /// Spawns the delay for `scheduled` and keeps its abort handle.
    ///
    /// Returns `Task::none()` if `scheduled` was cancelled in the meantime.
    pub fn task<M>(
        &mut self,
        scheduled: Scheduled,
        on_fire: impl FnOnce(TimerToken) -> M + Send + 'static,
    ) -> Task<M>
    where
        M: Send + 'static,
    {
        let Some(pending) = self
            .pending
            .as_mut()
            .filter(|pending| pending.token == scheduled.token)
        else {
            return Task::none();
        };

        let Scheduled { token, after } = scheduled;
        // The sleep is created on first poll, inside the executor's runtime.
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(after).await },
            move |()| on_fire(token),
        )
        .abortable();
        pending.abort = Some(handle);
        task
    }

    /// Cancels the pending dismissal, if any.
    ///
    /// Returns `true` if something was cancelled. Cancelling twice is a no-op.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                if let Some(handle) = pending.abort {
                    handle.abort();
                }
                true
            }
            None => false,
        }
    }

    /// Consumes `token` if it is the pending dismissal.
    ///
    /// Returns `false` for stale tokens from cancelled or superseded timers.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match &self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Returns whether a dismissal is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the outstanding dismissal, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<TimerToken> {
        self.pending.as_ref().map(|pending| pending.token)
    }
}
