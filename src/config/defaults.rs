// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for every configurable setting.
//!
//! # Categories
//!
//! - **Placement**: Inset of the toast from its anchor edge
//! - **Timing**: Visible duration and transition length

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Default inset between the toast and its anchor edge (logical pixels).
pub const DEFAULT_PADDING: f32 = 16.0;

/// Minimum inset.
pub const MIN_PADDING: f32 = 0.0;

/// Maximum inset.
pub const MAX_PADDING: f32 = 96.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a toast stays visible (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 3.0;

/// Minimum visible time (in seconds). Zero hides on the next tick.
pub const MIN_DURATION_SECS: f64 = 0.0;

/// Maximum visible time (in seconds).
pub const MAX_DURATION_SECS: f64 = 60.0;

/// Default show/hide transition length (in milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Minimum transition length. Zero disables the transition.
pub const MIN_ANIMATION_MS: u64 = 0;

/// Maximum transition length (in milliseconds).
pub const MAX_ANIMATION_MS: u64 = 2_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PADDING >= 0.0);
    assert!(MAX_PADDING > MIN_PADDING);
    assert!(DEFAULT_PADDING >= MIN_PADDING);
    assert!(DEFAULT_PADDING <= MAX_PADDING);

    assert!(MIN_DURATION_SECS >= 0.0);
    assert!(MAX_DURATION_SECS > MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS <= MAX_DURATION_SECS);

    assert!(MAX_ANIMATION_MS > MIN_ANIMATION_MS);
    assert!(DEFAULT_ANIMATION_MS >= MIN_ANIMATION_MS);
    assert!(DEFAULT_ANIMATION_MS <= MAX_ANIMATION_MS);
};
