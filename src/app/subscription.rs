// SPDX-License-Identifier: MPL-2.0
//! Animation frame subscriptions.
//!
//! Frames are only requested while a toast is fading, so an idle window
//! does not redraw.

use super::Message;
use crate::ui::toast::{FlagToast, PayloadToast};
use iced::Subscription;
use std::time::Instant;

pub fn create_frame_subscription(
    toast: &PayloadToast,
    banner: &FlagToast,
    now: Instant,
) -> Subscription<Message> {
    Subscription::batch([
        toast.subscription(now).map(Message::Toast),
        banner.subscription(now).map(Message::Banner),
    ])
}
