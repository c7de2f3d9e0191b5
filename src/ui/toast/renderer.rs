// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! [`layout`] resolves a [`ToastState`] into what will be drawn: a compact
//! pill for simple toasts, a colored card for everything else, with default
//! icon and title filled in from the severity. [`view`] turns that layout into
//! widgets and docks it against the anchor edge; [`attach`] stacks the result
//! over the host content.

use super::controller::Message;
use super::state::{Anchor, Severity, ToastState};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack};
use iced::{alignment, font, Background, Border, Color, Element, Font, Length, Padding, Theme};

/// Icon used when a toast names none (or an unknown one).
#[must_use]
pub fn default_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Regular | Severity::Success | Severity::Simple => "checkmark.circle.fill",
        Severity::Error => "xmark.circle.fill",
        Severity::Warning => "exclamationmark.triangle.fill",
        Severity::Info => "i.circle.fill",
    }
}

/// Card title used when a toast has none.
#[must_use]
pub fn default_title(severity: Severity) -> &'static str {
    match severity {
        Severity::Regular | Severity::Success | Severity::Simple => "Success!",
        Severity::Error => "Error!",
        Severity::Warning => "Warning!",
        Severity::Info => "Info!",
    }
}

/// Background and foreground of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColors {
    pub background: Color,
    pub foreground: Color,
}

/// Fixed palette per severity.
#[must_use]
pub fn colors(severity: Severity) -> CardColors {
    let (background, foreground) = match severity {
        Severity::Regular | Severity::Simple => (palette::WHITE, palette::BLACK),
        Severity::Success => (palette::GREEN, palette::WHITE),
        Severity::Warning => (palette::ORANGE, palette::WHITE),
        Severity::Error => (palette::RED, palette::WHITE),
        Severity::Info => (palette::CYAN, palette::WHITE),
    };
    CardColors {
        background,
        foreground,
    }
}

/// Resolved visual structure of a toast.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastLayout<'a> {
    /// Single-line pill: icon and message on white.
    Pill {
        icon: &'a str,
        icon_color: Color,
        message: &'a str,
    },
    /// Severity-colored card with title, message and dismiss affordance.
    Card {
        icon: &'a str,
        title: &'a str,
        message: &'a str,
        colors: CardColors,
    },
}

/// Resolves `toast` into a layout. Pure.
#[must_use]
pub fn layout(toast: &ToastState) -> ToastLayout<'_> {
    let severity = toast.severity();
    let icon = toast.icon().unwrap_or_else(|| default_icon(severity));

    if severity.is_simple() {
        ToastLayout::Pill {
            icon,
            icon_color: toast.icon_color(),
            message: toast.message(),
        }
    } else {
        ToastLayout::Card {
            icon,
            title: toast.title().unwrap_or_else(|| default_title(severity)),
            message: toast.message(),
            colors: colors(severity),
        }
    }
}

/// Transition state at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presence {
    /// Opacity applied to every color of the toast.
    pub opacity: f32,
    /// Extra distance away from the anchor edge while sliding.
    pub offset: f32,
    /// Inset from the anchor edge.
    pub padding: f32,
}

impl Presence {
    /// Fully shown, no motion.
    #[must_use]
    pub fn settled(padding: f32) -> Self {
        Self {
            opacity: 1.0,
            offset: 0.0,
            padding,
        }
    }

    /// Distance from the anchor edge. Sliding starts `offset` further in and
    /// settles on the resting padding.
    #[must_use]
    pub fn inset(&self) -> f32 {
        self.padding + self.offset.max(0.0)
    }
}

/// Renders `toast` docked against its anchor edge, filling the available space.
pub fn view(toast: &ToastState, presence: Presence) -> Element<'_, Message> {
    let body = match layout(toast) {
        ToastLayout::Pill {
            icon,
            icon_color,
            message,
        } => pill(icon, icon_color, message, toast.severity(), presence.opacity),
        ToastLayout::Card {
            icon,
            title,
            message,
            colors,
        } => card(icon, title, message, colors, toast.severity(), presence.opacity),
    };

    let tappable = mouse_area(body).on_press(Message::Dismiss);
    dock(tappable.into(), toast.anchor(), presence)
}

/// Stacks `overlay` above `host`. Without an overlay the host is returned as is.
pub fn attach<'a, M: 'a>(
    host: impl Into<Element<'a, M>>,
    overlay: Option<Element<'a, M>>,
) -> Element<'a, M> {
    let host = host.into();
    match overlay {
        Some(overlay) => Stack::new()
            .push(host)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => host,
    }
}

/// Padding that pins content to `anchor`, pushed in by `inset`.
#[must_use]
pub fn edge_padding(anchor: Anchor, inset: f32) -> Padding {
    let mut padding = Padding::ZERO;
    match anchor {
        Anchor::Top => padding.top = inset,
        Anchor::Bottom => padding.bottom = inset,
        Anchor::Leading => padding.left = inset,
        Anchor::Trailing => padding.right = inset,
    }
    padding
}

/// Alignment for `anchor`; the other axis is centered.
#[must_use]
pub fn edge_alignment(anchor: Anchor) -> (alignment::Horizontal, alignment::Vertical) {
    match anchor {
        Anchor::Top => (alignment::Horizontal::Center, alignment::Vertical::Top),
        Anchor::Bottom => (alignment::Horizontal::Center, alignment::Vertical::Bottom),
        Anchor::Leading => (alignment::Horizontal::Left, alignment::Vertical::Center),
        Anchor::Trailing => (alignment::Horizontal::Right, alignment::Vertical::Center),
    }
}

fn dock(content: Element<'_, Message>, anchor: Anchor, presence: Presence) -> Element<'_, Message> {
    let inset = presence.inset();
    let (align_x, align_y) = edge_alignment(anchor);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(edge_padding(anchor, inset))
        .into()
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

fn symbol_or_default(icon: &str, severity: Severity) -> iced::widget::svg::Handle {
    icons::symbol(icon)
        .or_else(|| icons::symbol(default_icon(severity)))
        .unwrap_or_else(icons::checkmark_circle_fill)
}

fn pill<'a>(
    icon: &'a str,
    icon_color: Color,
    message: &'a str,
    severity: Severity,
    opacity: f32,
) -> Element<'a, Message> {
    let icon = icons::tinted(
        symbol_or_default(icon, severity),
        sizing::ICON_MD,
        faded(icon_color, opacity),
    );
    let message = text(message)
        .size(typography::BODY)
        .font(Font {
            weight: font::Weight::Medium,
            ..Font::DEFAULT
        })
        .color(faded(palette::BLACK, opacity));

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(message);

    Container::new(content)
        .height(Length::Fixed(sizing::TOAST_PILL_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .padding(Padding {
            top: 0.0,
            right: spacing::MD,
            bottom: 0.0,
            left: spacing::SM,
        })
        .style(move |_theme: &Theme| pill_style(opacity))
        .into()
}

/// Insets each card column from the top-leading corner.
const CARD_CELL: Padding = Padding {
    top: spacing::XS,
    right: 0.0,
    bottom: 0.0,
    left: spacing::XS,
};

fn card<'a>(
    icon: &'a str,
    title: &'a str,
    message: &'a str,
    colors: CardColors,
    severity: Severity,
    opacity: f32,
) -> Element<'a, Message> {
    let foreground = faded(colors.foreground, opacity);

    let icon = Column::new().padding(CARD_CELL).push(icons::tinted(
        symbol_or_default(icon, severity),
        sizing::ICON_LG,
        foreground,
    ));

    let title = text(title)
        .size(typography::TITLE_SM)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(foreground);
    let message = text(message)
        .size(typography::BODY)
        .wrapping(text::Wrapping::None)
        .color(foreground);
    let lines = Column::new()
        .spacing(2.0)
        .padding(Padding {
            right: sizing::TOAST_CARD_TRAILING_GAP,
            ..CARD_CELL
        })
        .push(title)
        .push(Container::new(message).clip(true));

    let close = button(icons::tinted(icons::xmark(), sizing::ICON_SM, foreground))
        .on_press(Message::Dismiss)
        .padding(Padding::ZERO)
        .style(|_theme: &Theme, _status| button::Style {
            background: None,
            ..button::Style::default()
        });
    let close = Column::new().padding(CARD_CELL).push(close);

    let content = Row::new().push(icon).push(lines).push(close);

    Container::new(content)
        .height(Length::Fixed(sizing::TOAST_CARD_HEIGHT))
        .padding(Padding {
            top: 0.0,
            right: 10.0,
            bottom: 0.0,
            left: 6.0,
        })
        .style(move |_theme: &Theme| card_style(colors, opacity))
        .into()
}

/// Style of the pill container.
fn pill_style(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(palette::WHITE, opacity))),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: iced::Shadow {
            color: faded(shadow::PILL.color, opacity),
            ..shadow::PILL
        },
        ..Default::default()
    }
}

/// Style of the card container.
fn card_style(colors: CardColors, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(colors.background, opacity))),
        border: Border {
            radius: radius::CARD.into(),
            ..Border::default()
        },
        text_color: Some(faded(colors.foreground, opacity)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icons_match_table() {
        assert_eq!(default_icon(Severity::Regular), "checkmark.circle.fill");
        assert_eq!(default_icon(Severity::Success), "checkmark.circle.fill");
        assert_eq!(default_icon(Severity::Simple), "checkmark.circle.fill");
        assert_eq!(default_icon(Severity::Error), "xmark.circle.fill");
        assert_eq!(default_icon(Severity::Warning), "exclamationmark.triangle.fill");
        assert_eq!(default_icon(Severity::Info), "i.circle.fill");
    }

    #[test]
    fn default_titles_match_table() {
        assert_eq!(default_title(Severity::Regular), "Success!");
        assert_eq!(default_title(Severity::Success), "Success!");
        assert_eq!(default_title(Severity::Simple), "Success!");
        assert_eq!(default_title(Severity::Error), "Error!");
        assert_eq!(default_title(Severity::Warning), "Warning!");
        assert_eq!(default_title(Severity::Info), "Info!");
    }

    #[test]
    fn every_default_icon_is_embedded() {
        for severity in Severity::ALL {
            assert!(icons::is_known(default_icon(severity)));
        }
    }

    #[test]
    fn palette_matches_severity() {
        assert_eq!(colors(Severity::Regular).background, palette::WHITE);
        assert_eq!(colors(Severity::Regular).foreground, palette::BLACK);
        assert_eq!(colors(Severity::Simple), colors(Severity::Regular));
        assert_eq!(colors(Severity::Success).background, palette::GREEN);
        assert_eq!(colors(Severity::Warning).background, palette::ORANGE);
        assert_eq!(colors(Severity::Error).background, palette::RED);
        assert_eq!(colors(Severity::Info).background, palette::CYAN);
        for severity in [Severity::Success, Severity::Warning, Severity::Error, Severity::Info] {
            assert_eq!(colors(severity).foreground, palette::WHITE);
        }
    }

    #[test]
    fn error_toast_renders_red_card_with_defaults() {
        let toast = ToastState::error("This is a error").with_anchor(Anchor::Top);
        assert_eq!(
            layout(&toast),
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
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let toast = ToastState::warning("Low disk")
            .with_icon("i.circle.fill")
            .with_title("Heads up");
        match layout(&toast) {
            ToastLayout::Card { icon, title, .. } => {
                assert_eq!(icon, "i.circle.fill");
                assert_eq!(title, "Heads up");
            }
            ToastLayout::Pill { .. } => panic!("expected card"),
        }
    }

    #[test]
    fn simple_toast_renders_pill_and_ignores_title() {
        let toast = ToastState::simple("Answer Saved")
            .with_icon("checkmark.circle.fill")
            .with_title("Ignored");
        assert_eq!(
            layout(&toast),
            ToastLayout::Pill {
                icon: "checkmark.circle.fill",
                icon_color: palette::GREEN,
                message: "Answer Saved",
            }
        );
    }

    #[test]
    fn edge_padding_only_touches_anchor_side() {
        let top = edge_padding(Anchor::Top, 16.0);
        assert_eq!((top.top, top.bottom, top.left, top.right), (16.0, 0.0, 0.0, 0.0));
        let trailing = edge_padding(Anchor::Trailing, 16.0);
        assert_eq!(
            (trailing.top, trailing.bottom, trailing.left, trailing.right),
            (0.0, 0.0, 0.0, 16.0)
        );
    }

    #[test]
    fn slide_moves_toast_even_without_padding() {
        use crate::ui::design_tokens::motion;
        use crate::ui::toast::fade::Fade;
        use crate::ui::toast::state::AnimationSpec;
        use std::time::{Duration, Instant};

        let start = Instant::now();
        let mut fade = Fade::hidden();
        fade.show(AnimationSpec::linear(Duration::from_millis(300)).sliding(), start);
        let inset_at = |ms: u64| {
            let now = start + Duration::from_millis(ms);
            Presence {
                opacity: fade.opacity(now),
                offset: fade.offset(now),
                padding: 0.0,
            }
            .inset()
        };

        assert!((inset_at(0) - motion::SLIDE_DISTANCE).abs() < f32::EPSILON);
        assert!(inset_at(50) < inset_at(0));
        assert!(inset_at(150) < inset_at(50));
        assert!(inset_at(300).abs() < f32::EPSILON);
    }

    #[test]
    fn slide_starts_moving_immediately_with_default_padding() {
        let resting = Presence::settled(16.0);
        let early = Presence {
            offset: 20.0,
            ..resting
        };
        assert!(early.inset() > resting.inset());
        assert!((resting.inset() - 16.0).abs() < f32::EPSILON);
    }

    #[test]
    fn opposite_axis_is_centered() {
        assert_eq!(edge_alignment(Anchor::Top).0, alignment::Horizontal::Center);
        assert_eq!(edge_alignment(Anchor::Bottom).0, alignment::Horizontal::Center);
        assert_eq!(edge_alignment(Anchor::Leading).1, alignment::Vertical::Center);
        assert_eq!(edge_alignment(Anchor::Trailing).1, alignment::Vertical::Center);
    }

    #[test]
    fn card_style_fades_with_opacity() {
        let style = card_style(colors(Severity::Error), 0.5);
        match style.background {
            Some(Background::Color(color)) => assert!((color.a - 0.5).abs() < f32::EPSILON),
            _ => panic!("expected color background"),
        }
    }

    #[test]
    fn pill_style_is_fully_rounded() {
        let style = pill_style(1.0);
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::FULL));
        assert_eq!(style.shadow.offset, shadow::PILL.offset);
    }

    #[test]
    fn view_builds_for_every_severity() {
        for severity in Severity::ALL {
            let toast = ToastState::new("message").with_severity(severity);
            let _ = view(&toast, Presence::settled(16.0));
        }
    }
}
