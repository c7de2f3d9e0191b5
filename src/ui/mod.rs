// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`toast`] - Toast state, lifecycle controllers and rendering
//! - [`styles`] - Styles of the showcase screen (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG symbols referenced by identifier

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod toast;
