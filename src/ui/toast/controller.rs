// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle controllers.
//!
//! Two integration modes share the same core:
//!
//! - [`FlagToast`]: the host owns a `Binding<bool>` and the toast content is
//!   fixed at construction. Raising the flag shows the toast; lowering it (from
//!   the host, the timer or a tap) hides it.
//! - [`PayloadToast`]: the host owns a `Binding<Option<ToastState>>`. Assigning
//!   `Some` shows (or replaces) the toast, assigning `None` hides it.
//!
//! After mutating its binding the host calls `observe`, and routes
//! [`ToastMessage`]s back through `update`. Both return the Iced task that
//! drives the dismissal timer. Every show cancels the previous timer first,
//! so only the most recent duration can ever hide the toast.

use super::binding::Binding;
use super::fade::Fade;
use super::renderer::{self, Presence};
use super::state::{Anchor, AnimationSpec, ToastState};
use super::timer::{DismissTimer, TimerToken};
use iced::{window, Color, Element, Subscription, Task};
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user tapped the toast or its dismiss affordance.
    Dismiss,
    /// A dismissal timer elapsed.
    Expired(TimerToken),
    /// Animation frame while a transition is running.
    Frame(Instant),
}

/// Observable visibility of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing has been shown yet.
    #[default]
    Idle,
    Visible,
    /// A toast was shown and has since been dismissed.
    Hidden,
}

/// State shared by both modes: timer, transition and phase broadcast.
#[derive(Debug)]
struct Presenter {
    timer: DismissTimer,
    fade: Fade,
    phase: watch::Sender<Phase>,
    padding: f32,
}

impl Presenter {
    fn new(padding: f32) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            timer: DismissTimer::new(),
            fade: Fade::hidden(),
            phase,
            padding,
        }
    }

    fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    fn set_phase(&self, next: Phase) {
        self.phase.send_if_modified(|phase| {
            if *phase == next {
                false
            } else {
                *phase = next;
                true
            }
        });
    }

    fn show(&mut self, duration: Duration, animation: AnimationSpec, now: Instant) -> Task<Message> {
        let scheduled = self.timer.schedule(duration);
        self.fade.show(animation, now);
        self.set_phase(Phase::Visible);
        tracing::debug!(?duration, token = ?scheduled.token, "toast shown");
        self.timer.task(scheduled, Message::Expired)
    }

    /// Cancels the timer and starts the fade-out. Returns `false` if already hidden.
    fn hide(&mut self, now: Instant) -> bool {
        self.timer.cancel();
        if self.phase() != Phase::Visible {
            return false;
        }
        self.fade.hide(now);
        self.set_phase(Phase::Hidden);
        tracing::debug!("toast hidden");
        true
    }

    fn subscription(&self, now: Instant) -> Subscription<Message> {
        if self.fade.is_animating(now) {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    fn presence(&self, now: Instant) -> Option<Presence> {
        self.fade.is_rendered(now).then(|| Presence {
            opacity: self.fade.opacity(now),
            offset: self.fade.offset(now),
            padding: self.padding,
        })
    }
}

// =============================================================================
// Externally-driven mode
// =============================================================================

/// Toast whose visibility is a host-owned flag.
#[derive(Debug)]
pub struct FlagToast {
    content: ToastState,
    presenter: Presenter,
    /// Last flag value this controller acted on.
    visible: bool,
    seen_revision: Option<u64>,
}

impl FlagToast {
    /// Creates a controller for fixed `content`, inset `padding` from its edge.
    pub fn new(content: ToastState, padding: f32) -> Self {
        Self {
            content,
            presenter: Presenter::new(padding),
            visible: false,
            seen_revision: None,
        }
    }

    /// Builds the toast content from individual fields.
    ///
    /// Empty `icon` and `title` fall back to the severity defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn with_fields(
        icon: impl Into<String>,
        icon_color: Color,
        title: impl Into<String>,
        message: impl Into<String>,
        anchor: Anchor,
        duration: Duration,
        animation: AnimationSpec,
        padding: f32,
    ) -> Self {
        let content = ToastState::new(message)
            .with_icon(icon)
            .with_icon_color(icon_color)
            .with_title(title)
            .with_anchor(anchor)
            .with_duration(duration)
            .with_animation(animation);
        Self::new(content, padding)
    }

    /// Reacts to a new assignment of the host flag.
    ///
    /// Raising the flag (re)starts the dismissal timer, even if it was lowered
    /// and raised again since the last call. Lowering it cancels the timer.
    /// Calling this without an assignment does nothing.
    pub fn observe(&mut self, flag: &Binding<bool>, now: Instant) -> Task<Message> {
        if self.seen_revision == Some(flag.revision()) {
            return Task::none();
        }
        self.seen_revision = Some(flag.revision());

        let requested = *flag.get();
        if !requested && !self.visible {
            return Task::none();
        }
        self.visible = requested;

        if requested {
            self.presenter
                .show(self.content.duration(), self.content.animation(), now)
        } else {
            self.presenter.hide(now);
            Task::none()
        }
    }

    /// Cancels the timer and lowers the flag. No-op while hidden.
    pub fn dismiss(&mut self, flag: &mut Binding<bool>, now: Instant) {
        if !self.visible && !*flag.get() {
            return;
        }
        self.visible = false;
        if *flag.get() {
            flag.set(false);
        }
        self.seen_revision = Some(flag.revision());
        self.presenter.hide(now);
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message, flag: &mut Binding<bool>, now: Instant) -> Task<Message> {
        match message {
            Message::Dismiss => self.dismiss(flag, now),
            Message::Expired(token) => {
                if self.presenter.timer.fire(token) {
                    self.dismiss(flag, now);
                } else {
                    tracing::trace!(?token, "ignoring stale dismissal");
                }
            }
            Message::Frame(_) => {}
        }
        Task::none()
    }

    #[must_use]
    pub fn content(&self) -> &ToastState {
        &self.content
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.presenter.phase()
    }

    /// Subscribes to phase changes.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.presenter.phase.subscribe()
    }

    #[must_use]
    pub fn has_pending_dismissal(&self) -> bool {
        self.presenter.timer.is_pending()
    }

    /// Token an `Expired` message must carry to hide the current toast.
    #[must_use]
    pub fn pending_dismissal(&self) -> Option<TimerToken> {
        self.presenter.timer.pending_token()
    }

    /// Returns whether a show/hide transition is running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.presenter.fade.is_animating(now)
    }

    /// Animation frames while a transition is running at `now`.
    pub fn subscription(&self, now: Instant) -> Subscription<Message> {
        self.presenter.subscription(now)
    }

    /// Layers the toast over `host`.
    pub fn view<'a, M: 'a>(
        &'a self,
        host: impl Into<Element<'a, M>>,
        now: Instant,
        on_message: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M> {
        let overlay = self
            .presenter
            .presence(now)
            .map(|presence| renderer::view(&self.content, presence).map(on_message));
        renderer::attach(host, overlay)
    }
}

// =============================================================================
// Self-driven mode
// =============================================================================

/// Toast whose visibility follows a host-owned optional payload.
#[derive(Debug)]
pub struct PayloadToast {
    presenter: Presenter,
    seen_revision: Option<u64>,
    /// Last shown content, kept so the fade-out still has something to draw.
    retained: Option<ToastState>,
}

impl PayloadToast {
    /// Creates a controller whose toasts are inset `padding` from their edge.
    #[must_use]
    pub fn new(padding: f32) -> Self {
        Self {
            presenter: Presenter::new(padding),
            seen_revision: None,
            retained: None,
        }
    }

    /// Reacts to a new assignment of the host payload.
    ///
    /// `Some` shows the toast immediately and restarts the timer with its
    /// duration, replacing whatever was visible. `None` hides it.
    pub fn observe(&mut self, payload: &Binding<Option<ToastState>>, now: Instant) -> Task<Message> {
        if self.seen_revision == Some(payload.revision()) {
            return Task::none();
        }
        self.seen_revision = Some(payload.revision());

        match payload.get() {
            Some(toast) => {
                self.retained = Some(toast.clone());
                self.presenter
                    .show(toast.duration(), toast.animation(), now)
            }
            None => {
                self.presenter.hide(now);
                Task::none()
            }
        }
    }

    /// Cancels the timer and clears the payload. No-op while hidden.
    pub fn dismiss(&mut self, payload: &mut Binding<Option<ToastState>>, now: Instant) {
        if payload.is_some() {
            payload.take();
        }
        self.seen_revision = Some(payload.revision());
        self.presenter.hide(now);
    }

    /// Handles a toast message.
    pub fn update(
        &mut self,
        message: Message,
        payload: &mut Binding<Option<ToastState>>,
        now: Instant,
    ) -> Task<Message> {
        match message {
            Message::Dismiss => self.dismiss(payload, now),
            Message::Expired(token) => {
                if self.presenter.timer.fire(token) {
                    self.dismiss(payload, now);
                } else {
                    tracing::trace!(?token, "ignoring stale dismissal");
                }
            }
            Message::Frame(_) => {}
        }
        Task::none()
    }

    /// Returns the visible toast, or the last one shown while it fades out.
    #[must_use]
    pub fn content(&self) -> Option<&ToastState> {
        self.retained.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.presenter.phase() == Phase::Visible
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.presenter.phase()
    }

    /// Subscribes to phase changes.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.presenter.phase.subscribe()
    }

    #[must_use]
    pub fn has_pending_dismissal(&self) -> bool {
        self.presenter.timer.is_pending()
    }

    /// Token an `Expired` message must carry to hide the current toast.
    #[must_use]
    pub fn pending_dismissal(&self) -> Option<TimerToken> {
        self.presenter.timer.pending_token()
    }

    /// Returns whether a show/hide transition is running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.presenter.fade.is_animating(now)
    }

    /// Animation frames while a transition is running at `now`.
    pub fn subscription(&self, now: Instant) -> Subscription<Message> {
        self.presenter.subscription(now)
    }

    /// Layers the current (or retained) toast over `host`.
    pub fn view<'a, M: 'a>(
        &'a self,
        host: impl Into<Element<'a, M>>,
        now: Instant,
        on_message: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M> {
        let overlay = self
            .retained
            .as_ref()
            .zip(self.presenter.presence(now))
            .map(|(toast, presence)| renderer::view(toast, presence).map(on_message));
        renderer::attach(host, overlay)
    }
}
