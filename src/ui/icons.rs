// SPDX-License-Identifier: MPL-2.0
//! Symbol icons referenced by identifier.
//!
//! Toasts name their icon with a symbol identifier such as
//! `checkmark.circle.fill`. Each known identifier maps to an embedded
//! monochrome SVG whose handle is created once and cached in a `OnceLock`.
//! Icons are drawn in a single color so the caller can tint them freely;
//! inner glyphs are cut out with masks rather than painted white.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! if let Some(handle) = icons::symbol("xmark.circle.fill") {
//!     let icon = icons::tinted(handle, 30.0, palette::WHITE);
//! }
//! ```

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

// =============================================================================
// Macro for symbol definition with cached handle
// =============================================================================

/// Defines a function returning the cached handle of an embedded SVG symbol.
macro_rules! define_symbol {
    ($name:ident, $svg:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| Handle::from_memory($svg.as_bytes()))
                .clone()
        }
    };
}

const CHECKMARK_CIRCLE_FILL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
<defs><mask id="m"><rect width="24" height="24" fill="white"/>
<path d="M7 12.5l3.2 3.2L17 9" fill="none" stroke="black" stroke-width="2.4" stroke-linecap="round" stroke-linejoin="round"/></mask></defs>
<circle cx="12" cy="12" r="11" fill="black" mask="url(#m)"/></svg>"#;

const XMARK_CIRCLE_FILL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
<defs><mask id="m"><rect width="24" height="24" fill="white"/>
<path d="M8.5 8.5l7 7M15.5 8.5l-7 7" fill="none" stroke="black" stroke-width="2.4" stroke-linecap="round"/></mask></defs>
<circle cx="12" cy="12" r="11" fill="black" mask="url(#m)"/></svg>"#;

const EXCLAMATIONMARK_TRIANGLE_FILL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
<defs><mask id="m"><rect width="24" height="24" fill="white"/>
<path d="M12 9v5" fill="none" stroke="black" stroke-width="2.4" stroke-linecap="round"/>
<circle cx="12" cy="17.5" r="1.4" fill="black"/></mask></defs>
<path d="M10.3 2.9a2 2 0 0 1 3.4 0l9 15.6A2 2 0 0 1 21 21.5H3a2 2 0 0 1-1.7-3l9-15.6z" fill="black" mask="url(#m)"/></svg>"#;

const I_CIRCLE_FILL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
<defs><mask id="m"><rect width="24" height="24" fill="white"/>
<circle cx="12" cy="7.5" r="1.5" fill="black"/>
<path d="M12 11v6.5" fill="none" stroke="black" stroke-width="2.4" stroke-linecap="round"/></mask></defs>
<circle cx="12" cy="12" r="11" fill="black" mask="url(#m)"/></svg>"#;

const XMARK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
<path d="M6 6l12 12M18 6L6 18" fill="none" stroke="black" stroke-width="2.2" stroke-linecap="round"/></svg>"#;

define_symbol!(
    checkmark_circle_fill,
    CHECKMARK_CIRCLE_FILL,
    "Filled circle with a checkmark cut out."
);
define_symbol!(
    xmark_circle_fill,
    XMARK_CIRCLE_FILL,
    "Filled circle with an X cut out."
);
define_symbol!(
    exclamationmark_triangle_fill,
    EXCLAMATIONMARK_TRIANGLE_FILL,
    "Filled triangle with an exclamation mark cut out."
);
define_symbol!(
    i_circle_fill,
    I_CIRCLE_FILL,
    "Filled circle with a lowercase i cut out."
);
define_symbol!(xmark, XMARK, "Plain X, used as the dismiss affordance.");

/// Identifiers of every embedded symbol.
pub const KNOWN_SYMBOLS: [&str; 5] = [
    "checkmark.circle.fill",
    "xmark.circle.fill",
    "exclamationmark.triangle.fill",
    "i.circle.fill",
    "xmark",
];

/// Looks up a symbol by identifier.
#[must_use]
pub fn symbol(name: &str) -> Option<Handle> {
    match name {
        "checkmark.circle.fill" => Some(checkmark_circle_fill()),
        "xmark.circle.fill" => Some(xmark_circle_fill()),
        "exclamationmark.triangle.fill" => Some(exclamationmark_triangle_fill()),
        "i.circle.fill" => Some(i_circle_fill()),
        "xmark" => Some(xmark()),
        _ => None,
    }
}

/// Returns whether `name` is an embedded symbol.
#[must_use]
pub fn is_known(name: &str) -> bool {
    KNOWN_SYMBOLS.contains(&name)
}

/// Square SVG widget of `size`, painted in `color`.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a, Theme> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
