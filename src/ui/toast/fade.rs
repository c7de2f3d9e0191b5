// SPDX-License-Identifier: MPL-2.0
//! Presence transition of the toast container.
//!
//! Tracks a linear presence value between hidden (`0.0`) and shown (`1.0`)
//! over the duration of an [`AnimationSpec`]. Reversing mid-way starts from
//! the current value, so a toast replaced during its fade-out fades back in
//! without jumping.

use super::state::{AnimationSpec, Motion};
use crate::ui::design_tokens::motion;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    spec: AnimationSpec,
}

impl Default for Fade {
    fn default() -> Self {
        Self::hidden()
    }
}

impl Fade {
    /// Fully hidden, not animating.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started_at: None,
            spec: AnimationSpec::default(),
        }
    }

    /// Starts fading in using `spec`.
    pub fn show(&mut self, spec: AnimationSpec, now: Instant) {
        self.spec = spec;
        self.retarget(1.0, now);
    }

    /// Starts fading out, keeping the spec of the last show.
    pub fn hide(&mut self, now: Instant) {
        self.retarget(0.0, now);
    }

    fn retarget(&mut self, to: f32, now: Instant) {
        self.from = self.linear(now);
        self.to = to;
        self.started_at = Some(now);
    }

    fn linear(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };
        let total = self.spec.duration.as_secs_f32();
        if total <= 0.0 {
            return self.to;
        }
        let t = (now.saturating_duration_since(started_at).as_secs_f32() / total).min(1.0);
        self.from + (self.to - self.from) * t
    }

    /// Eased opacity in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.spec.curve.apply(self.linear(now))
    }

    /// Distance from the resting position, away from the anchor edge.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        match self.spec.motion {
            Motion::Fade => 0.0,
            Motion::Slide => (1.0 - self.opacity(now)) * motion::SLIDE_DISTANCE,
        }
    }

    /// Returns whether the transition is still running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        (self.linear(now) - self.to).abs() > f32::EPSILON
    }

    /// Returns whether anything should be drawn (shown or fading out).
    #[must_use]
    pub fn is_rendered(&self, now: Instant) -> bool {
        self.to > 0.0 || self.is_animating(now)
    }
}
