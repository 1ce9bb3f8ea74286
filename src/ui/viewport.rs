// SPDX-License-Identifier: MPL-2.0
//! Main viewport: the selected slide with navigation arrows floating at the
//! sides and an info overlay (image tag + filename) in the bottom-left corner.

use crate::i18n::I18n;
use crate::media::SlideImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image, text, tooltip, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Messages emitted by the viewport.
#[derive(Debug, Clone)]
pub enum Message {
    PreviousPressed,
    NextPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Previous,
    Next,
}

/// Process a viewport message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::PreviousPressed => Event::Previous,
        Message::NextPressed => Event::Next,
    }
}

/// Contextual data needed to render the viewport.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    /// Decoded slide (or placeholder) currently selected.
    pub slide: &'a SlideImage,
    /// 1-based position of the selection.
    pub position: usize,
    /// Final path segment of the selected slide.
    pub label: Option<String>,
}

/// Render the viewport with its overlays.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let picture = Container::new(
        image(ctx.slide.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(iced::ContentFit::Contain),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture)
        .push(nav_arrow(
            ctx.i18n,
            ctx.scheme,
            icons::chevron_left(),
            "nav-previous-tooltip",
            Message::PreviousPressed,
            alignment::Horizontal::Left,
        ))
        .push(nav_arrow(
            ctx.i18n,
            ctx.scheme,
            icons::chevron_right(),
            "nav-next-tooltip",
            Message::NextPressed,
            alignment::Horizontal::Right,
        ))
        .push(info_overlay(ctx.scheme, ctx.position, ctx.label));

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .style(styles::surface(ctx.scheme.surface_primary))
        .into()
}

/// One round arrow button, docked to a side and vertically centered.
fn nav_arrow<'a>(
    i18n: &'a I18n,
    scheme: &ColorScheme,
    icon: iced::widget::svg::Handle,
    tooltip_key: &str,
    message: Message,
    side: alignment::Horizontal,
) -> Element<'a, Message> {
    let arrow = button(
        Container::new(icons::sized(icon, sizing::ICON_LG, scheme.accent))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .style(styles::nav_button(scheme))
    .on_press(message);

    let with_tooltip = tooltip::Tooltip::new(
        arrow,
        text(i18n.tr(tooltip_key)).size(typography::CAPTION),
        tooltip::Position::FollowCursor,
    )
    .gap(spacing::XXS);

    Container::new(with_tooltip)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Bottom-left panel with the `IMAGE_NN` tag and the slide's filename.
fn info_overlay<'a>(
    scheme: &ColorScheme,
    position: usize,
    label: Option<String>,
) -> Element<'a, Message> {
    let tag = text(format!("IMAGE_{:02}", position))
        .size(typography::BODY)
        .color(scheme.accent);

    let filename = text(label.unwrap_or_else(|| "Unknown".to_string()))
        .size(typography::CAPTION)
        .color(scheme.text_secondary);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(tag)
            .push(filename),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::info_overlay(scheme));

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
