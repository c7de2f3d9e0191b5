// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::config::ToastConfig;
use crate::i18n::fluent::I18n;
use crate::ui::toast::{
    Anchor, Binding, FlagToast, PayloadToast, Severity, ToastMessage, ToastState,
};
use iced::{Color, Task};
use std::time::Instant;

/// Mutable view of the application state handed to each handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub toast_config: &'a ToastConfig,
    pub payload: &'a mut Binding<Option<ToastState>>,
    pub toast: &'a mut PayloadToast,
    pub banner_flag: &'a mut Binding<bool>,
    pub banner: &'a mut FlagToast,
    pub now: Instant,
}

/// Edge each demo severity is docked to.
#[must_use]
pub fn demo_anchor(severity: Severity) -> Anchor {
    match severity {
        Severity::Success | Severity::Info => Anchor::Trailing,
        Severity::Error | Severity::Warning | Severity::Regular => Anchor::Top,
        Severity::Simple => Anchor::Bottom,
    }
}

fn message_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Regular => "toast-regular-message",
        Severity::Success => "toast-success-message",
        Severity::Warning => "toast-warning-message",
        Severity::Error => "toast-error-message",
        Severity::Info => "toast-info-message",
        Severity::Simple => "toast-simple-message",
    }
}

/// Builds the demo toast for `severity`, timed by the configured defaults.
#[must_use]
pub fn demo_toast(severity: Severity, i18n: &I18n, config: &ToastConfig) -> ToastState {
    ToastState::new(i18n.tr(message_key(severity)))
        .with_severity(severity)
        .with_anchor(demo_anchor(severity))
        .with_duration(config.duration())
        .with_animation(config.animation())
}

/// Builds the flag-driven banner from individual fields.
#[must_use]
pub fn banner(i18n: &I18n, config: &ToastConfig) -> FlagToast {
    FlagToast::with_fields(
        "i.circle.fill",
        Color::WHITE,
        i18n.tr("toast-banner-title"),
        i18n.tr("toast-banner-message"),
        Anchor::Bottom,
        config.duration(),
        config.animation(),
        config.padding(),
    )
}

pub fn handle_show_toast(ctx: &mut UpdateContext<'_>, severity: Severity) -> Task<Message> {
    ctx.payload
        .set(Some(demo_toast(severity, ctx.i18n, ctx.toast_config)));
    ctx.toast.observe(ctx.payload, ctx.now).map(Message::Toast)
}

pub fn handle_toggle_banner(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.banner_flag.toggle();
    ctx.banner
        .observe(ctx.banner_flag, ctx.now)
        .map(Message::Banner)
}

pub fn handle_toast_message(ctx: &mut UpdateContext<'_>, message: ToastMessage) -> Task<Message> {
    ctx.toast
        .update(message, ctx.payload, ctx.now)
        .map(Message::Toast)
}

pub fn handle_banner_message(ctx: &mut UpdateContext<'_>, message: ToastMessage) -> Task<Message> {
    ctx.banner
        .update(message, ctx.banner_flag, ctx.now)
        .map(Message::Banner)
}
