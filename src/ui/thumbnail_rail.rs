// SPDX-License-Identifier: MPL-2.0
//! Thumbnail rail: one round button per slide, the selected entry carrying an
//! accent ring, with a caption above and a 1-based counter below.

use crate::i18n::I18n;
use crate::media::LoadedSlide;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, image, text, Column, Container};
use iced::{alignment, Element, Length};

/// Messages emitted by the rail.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Select(usize),
}

/// Process a rail message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ThumbnailPressed(index) => Event::Select(index),
    }
}

/// Contextual data needed to render the rail.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    /// Loaded slides (decoded or placeholder), in order.
    pub slides: &'a [LoadedSlide],
    pub selected: usize,
}

/// Render the rail column.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let caption = text(ctx.i18n.tr("gallery-caption"))
        .size(typography::CAPTION)
        .color(ctx.scheme.accent);

    let mut entries = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(caption);

    for (index, slide) in ctx.slides.iter().enumerate() {
        let picture = image(slide.thumbnail.handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .content_fit(iced::ContentFit::Cover);

        let entry = button(picture)
            .padding(spacing::XXS)
            .style(styles::thumbnail(ctx.scheme, index == ctx.selected))
            .on_press(Message::ThumbnailPressed(index));

        entries = entries.push(entry);
    }

    // 1-based position over total, mirrored in the viewport tag.
    let counter = text(format!("{}/{}", ctx.selected + 1, ctx.slides.len()))
        .size(typography::CAPTION)
        .color(ctx.scheme.text_secondary);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(entries)
        .push(counter);

    Container::new(content)
        .width(Length::Fixed(sizing::RAIL_WIDTH))
        .height(Length::Fill)
        .padding([spacing::LG, spacing::MD])
        .align_x(alignment::Horizontal::Center)
        .style(container_style(ctx.scheme))
        .into()
}

fn container_style(scheme: &ColorScheme) -> impl Fn(&iced::Theme) -> container::Style {
    styles::surface(scheme.surface_secondary)
}
