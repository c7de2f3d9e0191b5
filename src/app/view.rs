// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The showcase is a single list of buttons, one per severity, plus a toggle
//! for the flag-driven banner. Both toasts are layered over it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::toast::{FlagToast, PayloadToast, Severity};
use iced::widget::{button, text, Column, Container};
use iced::{alignment, font, Element, Font, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toast: &'a PayloadToast,
    pub banner: &'a FlagToast,
    pub banner_raised: bool,
    pub duration_secs: f64,
    pub now: Instant,
}

fn button_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "button-success",
        Severity::Info => "button-info",
        Severity::Error => "button-error",
        Severity::Warning => "button-warning",
        Severity::Regular => "button-regular",
        Severity::Simple => "button-simple",
    }
}

/// Order of the demo rows, matching the list a user scans top to bottom.
const DEMO_ORDER: [Severity; 6] = [
    Severity::Success,
    Severity::Info,
    Severity::Error,
    Severity::Warning,
    Severity::Regular,
    Severity::Simple,
];

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = showcase(&ctx);
    let with_banner = ctx.banner.view(screen, ctx.now, Message::Banner);
    ctx.toast.view(with_banner, ctx.now, Message::Toast)
}

fn showcase<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let seconds = format!("{}", ctx.duration_secs);

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(i18n.tr("showcase-title"))
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(text(i18n.tr("showcase-subtitle")).size(typography::BODY))
        .push(
            text(i18n.tr_with_args("showcase-duration-hint", &[("seconds", seconds.as_str())]))
                .size(typography::CAPTION),
        );

    let rows = DEMO_ORDER.iter().fold(Column::new(), |rows, &severity| {
        rows.push(
            button(text(i18n.tr(button_key(severity))).size(typography::BODY_LG))
                .on_press(Message::ShowToast(severity))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(styles::button::list_row),
        )
    });

    let banner_label = if ctx.banner_raised {
        i18n.tr("button-banner-hide")
    } else {
        i18n.tr("button-banner-show")
    };
    let banner_toggle = button(text(banner_label).size(typography::BODY))
        .on_press(Message::ToggleBanner)
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::SHOWCASE_WIDTH))
        .push(header)
        .push(section(i18n.tr("showcase-section-severities"), rows.into()))
        .push(section(
            i18n.tr("showcase-section-flag"),
            banner_toggle.into(),
        ));

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::screen)
        .into()
}

fn section<'a>(label: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::CAPTION))
        .push(
            Container::new(body)
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(styles::container::section),
        )
        .into()
}
