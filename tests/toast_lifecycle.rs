// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycles replayed on a virtual clock.
//!
//! Controllers never sleep themselves: they hand out a token per scheduled
//! dismissal and accept `Expired(token)` back. These tests record each token
//! with its due time and deliver the expiries in order, so timing properties
//! can be checked to the millisecond without waiting.

use iced::Color;
use iced_toast::ui::design_tokens::palette;
use iced_toast::ui::toast::renderer::CardColors;
use iced_toast::ui::toast::{
    layout, Anchor, AnimationSpec, Binding, FlagToast, PayloadToast, Phase, Severity,
    TimerToken, ToastLayout, ToastMessage, ToastState,
};
use std::time::{Duration, Instant};

/// Due expiries keyed by offset from the start of the test.
struct Timeline {
    origin: Instant,
    due: Vec<(Duration, TimerToken)>,
}

impl Timeline {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
            due: Vec::new(),
        }
    }

    fn at(&self, secs: f64) -> Instant {
        self.origin + Duration::from_secs_f64(secs)
    }

    /// Records the dismissal scheduled at `shown_at` for `duration`.
    fn record(&mut self, shown_at: f64, duration: Duration, token: Option<TimerToken>) {
        let token = token.expect("showing must schedule a dismissal");
        self.due
            .push((Duration::from_secs_f64(shown_at) + duration, token));
        self.due.sort_by_key(|(due, _)| *due);
    }

    /// Removes and returns every expiry due at or before `secs`.
    fn advance_to(&mut self, secs: f64) -> Vec<(f64, TimerToken)> {
        let now = Duration::from_secs_f64(secs);
        let split = self.due.partition_point(|(due, _)| *due <= now);
        self.due
            .drain(..split)
            .map(|(due, token)| (due.as_secs_f64(), token))
            .collect()
    }
}

fn run_payload(
    timeline: &mut Timeline,
    toast: &mut PayloadToast,
    payload: &mut Binding<Option<ToastState>>,
    until: f64,
) {
    for (fired_at, token) in timeline.advance_to(until) {
        let _ = toast.update(ToastMessage::Expired(token), payload, timeline.at(fired_at));
    }
}

fn run_flag(timeline: &mut Timeline, toast: &mut FlagToast, flag: &mut Binding<bool>, until: f64) {
    for (fired_at, token) in timeline.advance_to(until) {
        let _ = toast.update(ToastMessage::Expired(token), flag, timeline.at(fired_at));
    }
}

fn show(
    timeline: &mut Timeline,
    toast: &mut PayloadToast,
    payload: &mut Binding<Option<ToastState>>,
    at: f64,
    content: ToastState,
) {
    let duration = content.duration();
    payload.set(Some(content));
    let _ = toast.observe(payload, timeline.at(at));
    timeline.record(at, duration, toast.pending_dismissal());
}

#[test]
fn toast_hides_exactly_at_its_duration() {
    let mut timeline = Timeline::new();
    let mut toast = PayloadToast::new(16.0);
    let mut payload = Binding::new(None);

    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        0.0,
        ToastState::info("Hello").with_duration_secs(3.0),
    );

    run_payload(&mut timeline, &mut toast, &mut payload, 2.999);
    assert!(toast.is_visible());
    assert!(payload.is_some());

    run_payload(&mut timeline, &mut toast, &mut payload, 3.0);
    assert!(!toast.is_visible());
    assert!(payload.get().is_none());
    assert_eq!(toast.phase(), Phase::Hidden);
}

#[test]
fn replacement_is_governed_by_the_new_duration() {
    let mut timeline = Timeline::new();
    let mut toast = PayloadToast::new(16.0);
    let mut payload = Binding::new(None);

    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        0.0,
        ToastState::success("A").with_duration_secs(5.0),
    );
    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        1.0,
        ToastState::warning("B").with_duration_secs(2.0),
    );

    run_payload(&mut timeline, &mut toast, &mut payload, 2.9);
    assert_eq!(payload.get().as_ref().map(ToastState::message), Some("B"));

    run_payload(&mut timeline, &mut toast, &mut payload, 3.0);
    assert!(payload.get().is_none());
    assert!(!toast.is_visible());
}

#[test]
fn superseded_timer_never_hides_a_later_toast() {
    let mut timeline = Timeline::new();
    let mut toast = PayloadToast::new(16.0);
    let mut payload = Binding::new(None);

    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        0.0,
        ToastState::success("A").with_duration_secs(5.0),
    );
    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        1.0,
        ToastState::warning("B").with_duration_secs(2.0),
    );
    run_payload(&mut timeline, &mut toast, &mut payload, 3.0);
    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        4.0,
        ToastState::regular("C").with_duration_secs(10.0),
    );

    // A's original expiry arrives at 5.0 and must be ignored.
    run_payload(&mut timeline, &mut toast, &mut payload, 5.0);
    assert!(toast.is_visible());
    assert_eq!(payload.get().as_ref().map(ToastState::message), Some("C"));

    run_payload(&mut timeline, &mut toast, &mut payload, 14.0);
    assert!(!toast.is_visible());
}

#[test]
fn zero_duration_hides_on_the_next_delivery() {
    let mut timeline = Timeline::new();
    let mut toast = PayloadToast::new(16.0);
    let mut payload = Binding::new(None);

    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        0.0,
        ToastState::simple("Copied").with_duration(Duration::ZERO),
    );
    assert!(toast.is_visible());

    run_payload(&mut timeline, &mut toast, &mut payload, 0.0);
    assert!(!toast.is_visible());
}

#[test]
fn dismiss_while_visible_hides_and_cancels() {
    let mut timeline = Timeline::new();
    let mut toast = PayloadToast::new(16.0);
    let mut payload = Binding::new(None);

    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        0.0,
        ToastState::error("Boom").with_duration_secs(3.0),
    );
    let _ = toast.update(ToastMessage::Dismiss, &mut payload, timeline.at(1.0));

    assert!(payload.get().is_none());
    assert!(!toast.has_pending_dismissal());

    // The cancelled expiry still arrives and changes nothing.
    let revision = payload.revision();
    run_payload(&mut timeline, &mut toast, &mut payload, 3.0);
    assert_eq!(payload.revision(), revision);
    assert_eq!(toast.phase(), Phase::Hidden);
}

#[test]
fn dismiss_while_hidden_is_a_no_op() {
    let now = Instant::now();
    let mut toast = PayloadToast::new(16.0);
    let mut payload: Binding<Option<ToastState>> = Binding::new(None);

    toast.dismiss(&mut payload, now);
    toast.dismiss(&mut payload, now);

    assert_eq!(payload.revision(), 0);
    assert_eq!(toast.phase(), Phase::Idle);
    assert!(toast.content().is_none());
}

#[test]
fn hidden_toast_retains_its_content_for_the_fade_out() {
    let mut timeline = Timeline::new();
    let mut toast = PayloadToast::new(16.0);
    let mut payload = Binding::new(None);

    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        0.0,
        ToastState::info("Still here")
            .with_title("Heads up")
            .with_duration_secs(1.0),
    );
    run_payload(&mut timeline, &mut toast, &mut payload, 1.0);

    assert!(payload.get().is_none());
    let retained = toast.content().expect("content retained after hide");
    assert_eq!(retained.message(), "Still here");
    assert_eq!(retained.title(), Some("Heads up"));
    // The fade-out is still running right after the hide.
    assert!(toast.is_animating(timeline.at(1.0)));
    assert!(!toast.is_animating(timeline.at(1.0) + AnimationSpec::default().duration));
}

#[test]
fn retained_content_is_overwritten_not_merged() {
    let mut timeline = Timeline::new();
    let mut toast = PayloadToast::new(16.0);
    let mut payload = Binding::new(None);

    show(
        &mut timeline,
        &mut toast,
        &mut payload,
        0.0,
        ToastState::info("First").with_title("Title"),
    );
    show(&mut timeline, &mut toast, &mut payload, 0.5, ToastState::info("Second"));

    let content = toast.content().expect("content");
    assert_eq!(content.message(), "Second");
    assert_eq!(content.title(), None);
}

#[test]
fn error_toast_renders_red_card_and_hides_after_three_seconds() {
    let mut timeline = Timeline::new();
    let mut toast = PayloadToast::new(16.0);
    let mut payload = Binding::new(None);
    let error = ToastState::error("This is a error").with_anchor(Anchor::Top);

    assert_eq!(
        layout(&error),
        ToastLayout::Card {
            icon: "xmark.circle.fill",
            title: "Error!",
            message: "This is a error",
            colors: CardColors {
                background: palette::RED,
                foreground: palette::WHITE,
            },
        }
    );

    show(&mut timeline, &mut toast, &mut payload, 0.0, error);
    run_payload(&mut timeline, &mut toast, &mut payload, 2.5);
    assert!(toast.is_visible());
    run_payload(&mut timeline, &mut toast, &mut payload, 3.0);
    assert!(!toast.is_visible());
}

#[test]
fn simple_toast_renders_pill_without_title() {
    let toast = ToastState::simple("Copied")
        .with_title("Ignored")
        .with_icon_color(Color::BLACK);

    assert_eq!(
        layout(&toast),
        ToastLayout::Pill {
            icon: "checkmark.circle.fill",
            icon_color: Color::BLACK,
            message: "Copied",
        }
    );
}

#[test]
fn explicit_icon_and_title_override_defaults() {
    let toast = ToastState::warning("Low disk")
        .with_icon("i.circle.fill")
        .with_title("Storage");

    match layout(&toast) {
        ToastLayout::Card { icon, title, .. } => {
            assert_eq!(icon, "i.circle.fill");
            assert_eq!(title, "Storage");
        }
        other => panic!("expected card, got {other:?}"),
    }
}

#[test]
fn flag_toast_follows_the_host_flag() {
    let mut timeline = Timeline::new();
    let content = ToastState::success("Saved").with_duration_secs(2.0);
    let mut toast = FlagToast::new(content, 16.0);
    let mut flag = Binding::new(false);

    flag.set(true);
    let _ = toast.observe(&flag, timeline.at(0.0));
    timeline.record(0.0, Duration::from_secs(2), toast.pending_dismissal());

    run_flag(&mut timeline, &mut toast, &mut flag, 1.999);
    assert!(*flag.get());

    run_flag(&mut timeline, &mut toast, &mut flag, 2.0);
    assert!(!*flag.get());
    assert!(!toast.is_visible());
    assert_eq!(toast.phase(), Phase::Hidden);
}

#[test]
fn raising_the_flag_again_restarts_the_timer() {
    let mut timeline = Timeline::new();
    let content = ToastState::success("Saved").with_duration_secs(2.0);
    let mut toast = FlagToast::new(content, 16.0);
    let mut flag = Binding::new(false);

    flag.set(true);
    let _ = toast.observe(&flag, timeline.at(0.0));
    timeline.record(0.0, Duration::from_secs(2), toast.pending_dismissal());

    // Host lowers and raises the flag again before the first expiry.
    flag.set(false);
    let _ = toast.observe(&flag, timeline.at(1.0));
    flag.set(true);
    let _ = toast.observe(&flag, timeline.at(1.5));
    timeline.record(1.5, Duration::from_secs(2), toast.pending_dismissal());

    run_flag(&mut timeline, &mut toast, &mut flag, 2.0);
    assert!(*flag.get(), "first expiry was cancelled");

    run_flag(&mut timeline, &mut toast, &mut flag, 3.5);
    assert!(!*flag.get());
}

#[tokio::test]
async fn subscribers_are_notified_of_phase_changes() {
    let now = Instant::now();
    let mut toast = PayloadToast::new(16.0);
    let mut phases = toast.subscribe();
    let mut payload = Binding::new(None);

    payload.set(Some(ToastState::info("Hi")));
    let _ = toast.observe(&payload, now);
    phases.changed().await.expect("sender alive");
    assert_eq!(*phases.borrow_and_update(), Phase::Visible);

    toast.dismiss(&mut payload, now);
    phases.changed().await.expect("sender alive");
    assert_eq!(*phases.borrow_and_update(), Phase::Hidden);
}

#[test]
fn severities_have_distinct_card_palettes() {
    let backgrounds: Vec<Color> = Severity::ALL
        .iter()
        .filter(|severity| !severity.is_simple())
        .filter_map(|&severity| match layout(&ToastState::new("m").with_severity(severity)) {
            ToastLayout::Card { colors, .. } => Some(colors.background),
            ToastLayout::Pill { .. } => None,
        })
        .collect();

    assert_eq!(backgrounds.len(), 5);
    for (i, a) in backgrounds.iter().enumerate() {
        for b in &backgrounds[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
