// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`ToastState`] is an immutable snapshot of one notification: what it says,
//! how it looks, where it docks and how long it stays. Callers build one with
//! the severity constructors and the `#[must_use]` builder methods.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time a toast stays on screen.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// Default length of the show/hide transition.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Category of a toast, driving its default icon, title and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Neutral card on a white background.
    Regular,
    /// Operation completed successfully (green card).
    #[default]
    Success,
    /// Something needs attention (orange card).
    Warning,
    /// Operation failed (red card).
    Error,
    /// Informational message (cyan card).
    Info,
    /// Compact single-line pill.
    Simple,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 6] = [
        Severity::Regular,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Info,
        Severity::Simple,
    ];

    /// Returns whether this severity renders as a compact pill instead of a card.
    #[must_use]
    pub fn is_simple(self) -> bool {
        matches!(self, Severity::Simple)
    }
}

/// Screen edge a toast is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
    Leading,
    Trailing,
}

/// Easing applied to the show/hide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    /// Maps linear progress in `0.0..=1.0` onto the eased curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Curve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Movement layered under the opacity fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motion {
    /// Opacity only.
    #[default]
    Fade,
    /// Slides in from the anchor edge while fading.
    Slide,
}

/// Description of the show/hide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub curve: Curve,
    pub motion: Motion,
    pub duration: Duration,
}

impl AnimationSpec {
    /// Linear fade over `duration`.
    #[must_use]
    pub fn linear(duration: Duration) -> Self {
        Self {
            curve: Curve::Linear,
            motion: Motion::Fade,
            duration,
        }
    }

    /// Ease-in-out fade over `duration`.
    #[must_use]
    pub fn ease_in_out(duration: Duration) -> Self {
        Self {
            curve: Curve::EaseInOut,
            motion: Motion::Fade,
            duration,
        }
    }

    /// Switches the motion to a slide from the anchor edge.
    #[must_use]
    pub fn sliding(mut self) -> Self {
        self.motion = Motion::Slide;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::linear(DEFAULT_ANIMATION_DURATION)
    }
}

/// One toast notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastState {
    icon: Option<String>,
    icon_color: Color,
    title: Option<String>,
    message: String,
    severity: Severity,
    anchor: Anchor,
    duration: Duration,
    animation: AnimationSpec,
}

impl ToastState {
    /// Creates a success toast with the given message and default presentation.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            icon: None,
            icon_color: palette::GREEN,
            title: None,
            message: message.into(),
            severity: Severity::default(),
            anchor: Anchor::default(),
            duration: DEFAULT_DURATION,
            animation: AnimationSpec::default(),
        }
    }

    /// Creates a regular (white card) toast.
    pub fn regular(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Regular)
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Success)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Warning)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Error)
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Info)
    }

    /// Creates a compact pill toast.
    pub fn simple(message: impl Into<String>) -> Self {
        Self::new(message).with_severity(Severity::Simple)
    }

    /// Sets the icon identifier. An empty identifier keeps the severity default.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = non_empty(icon.into());
        self
    }

    #[must_use]
    pub fn with_icon_color(mut self, color: Color) -> Self {
        self.icon_color = color;
        self
    }

    /// Sets the card title. An empty title keeps the severity default.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the duration from fractional seconds.
    ///
    /// Negative values and NaN clamp to zero; values too large for a
    /// `Duration` saturate.
    #[must_use]
    pub fn with_duration_secs(mut self, secs: f64) -> Self {
        self.duration = Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(Duration::MAX);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Returns the explicit icon identifier, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn icon_color(&self) -> Color {
        self.icon_color
    }

    /// Returns the explicit title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns how long the toast stays before auto-dismissing.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn animation(&self) -> AnimationSpec {
        self.animation
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_toast_uses_documented_defaults() {
        let toast = ToastState::new("Saved");
        assert_eq!(toast.message(), "Saved");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.anchor(), Anchor::Top);
        assert_eq!(toast.duration(), Duration::from_secs(3));
        assert_eq!(toast.animation(), AnimationSpec::linear(Duration::from_millis(300)));
        assert_eq!(toast.icon_color(), palette::GREEN);
        assert!(toast.icon().is_none());
        assert!(toast.title().is_none());
    }

    #[test]
    fn empty_icon_and_title_are_treated_as_absent() {
        let toast = ToastState::info("hello").with_icon("").with_title("");
        assert!(toast.icon().is_none());
        assert!(toast.title().is_none());
    }

    #[test]
    fn empty_message_is_allowed() {
        assert_eq!(ToastState::error("").message(), "");
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(ToastState::regular("").severity(), Severity::Regular);
        assert_eq!(ToastState::success("").severity(), Severity::Success);
        assert_eq!(ToastState::warning("").severity(), Severity::Warning);
        assert_eq!(ToastState::error("").severity(), Severity::Error);
        assert_eq!(ToastState::info("").severity(), Severity::Info);
        assert_eq!(ToastState::simple("").severity(), Severity::Simple);
    }

    #[test]
    fn duration_secs_clamps_negative_and_nan_to_zero() {
        assert_eq!(ToastState::new("").with_duration_secs(-2.0).duration(), Duration::ZERO);
        assert_eq!(ToastState::new("").with_duration_secs(f64::NAN).duration(), Duration::ZERO);
        assert_eq!(
            ToastState::new("").with_duration_secs(1.5).duration(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn only_simple_is_simple() {
        for severity in Severity::ALL {
            assert_eq!(severity.is_simple(), severity == Severity::Simple);
        }
    }

    #[test]
    fn curves_start_at_zero_and_end_at_one() {
        for curve in [Curve::Linear, Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut] {
            assert!(curve.apply(0.0).abs() < f32::EPSILON);
            assert!((curve.apply(1.0) - 1.0).abs() < f32::EPSILON);
            assert!((curve.apply(2.0) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn ease_in_lags_linear_and_ease_out_leads() {
        assert!(Curve::EaseIn.apply(0.5) < Curve::Linear.apply(0.5));
        assert!(Curve::EaseOut.apply(0.5) > Curve::Linear.apply(0.5));
    }

    #[test]
    fn sliding_keeps_curve_and_duration() {
        let spec = AnimationSpec::ease_in_out(Duration::from_millis(200)).sliding();
        assert_eq!(spec.motion, Motion::Slide);
        assert_eq!(spec.curve, Curve::EaseInOut);
        assert_eq!(spec.duration, Duration::from_millis(200));
    }
}
