// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Grouped list section, one step off the window background.
///
/// Derived from the active Iced `Theme` so it reads in both light and dark
/// modes.
pub fn section(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window surface behind the showcase.
pub fn screen(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}
