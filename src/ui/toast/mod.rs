// SPDX-License-Identifier: MPL-2.0
//! Transient, auto-dismissing toast notifications.
//!
//! A toast appears docked to one screen edge, stays for its duration and then
//! fades out. Tapping it dismisses it early.
//!
//! # Components
//!
//! - [`state`] - Immutable [`ToastState`] with severity, anchor and animation
//! - [`binding`] - Host-owned [`Binding`] cells the controllers observe
//! - [`timer`] - Cancellable single-shot dismissal timer
//! - [`fade`] - Show/hide transition progress
//! - [`controller`] - [`FlagToast`] and [`PayloadToast`] lifecycle controllers
//! - [`renderer`] - Pure layout resolution and the Iced view
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::toast::{Binding, PayloadToast, ToastMessage, ToastState};
//!
//! // Host state
//! let mut toast = PayloadToast::new(16.0);
//! let mut payload = Binding::new(None);
//!
//! // Show a toast
//! payload.set(Some(ToastState::error("This is a error")));
//! let task = toast.observe(&payload, Instant::now()).map(Message::Toast);
//!
//! // In `update`, route toast messages back
//! let task = toast.update(msg, &mut payload, Instant::now()).map(Message::Toast);
//!
//! // In `view`, layer the toast over the screen
//! toast.view(screen, now, Message::Toast)
//! ```
//!
//! # Behavior
//!
//! - At most one dismissal timer per controller; showing again replaces it
//! - Cancelled timers can never hide a toast, even if already elapsed
//! - A hidden self-driven toast keeps its last content for the fade-out

pub mod binding;
pub mod controller;
pub mod fade;
pub mod renderer;
pub mod state;
pub mod timer;

pub use binding::Binding;
pub use controller::{FlagToast, Message as ToastMessage, PayloadToast, Phase};
pub use renderer::{default_icon, default_title, layout, ToastLayout};
pub use state::{AnimationSpec, Anchor, Curve, Motion, Severity, ToastState};
pub use timer::TimerToken;
