// SPDX-License-Identifier: MPL-2.0
//! Localization of the showcase screen and its demo toasts.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. The locale is picked from the CLI flag, then the config
//! file, then the OS, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
