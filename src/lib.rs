// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides transient, auto-dismissing toast notifications for
//! applications built with the Iced GUI framework.
//!
//! Toasts come in six severities, dock to one screen edge and dismiss
//! themselves after a duration or on tap. The crate also ships a small
//! showcase application with Fluent localization and persisted preferences.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
