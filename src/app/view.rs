// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the top bar (title and theme toggle), the thumbnail rail, and the
//! main viewport. An empty gallery renders the empty state instead of the
//! rail/viewport pair.

use super::Message;
use crate::gallery::Gallery;
use crate::i18n::I18n;
use crate::media::LoadedSlide;
use crate::theme_switcher::ThemeMode;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::empty_state;
use crate::ui::styles;
use crate::ui::theme_toggle;
use crate::ui::theming::ColorScheme;
use crate::ui::thumbnail_rail;
use crate::ui::viewport;
use iced::widget::{space, text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    pub mode: ThemeMode,
    pub gallery: &'a Gallery,
    pub slides: &'a [LoadedSlide],
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = if ctx.gallery.is_empty() {
        empty_state::view(ctx.i18n, ctx.scheme)
    } else {
        view_slider(&ctx)
    };

    Column::new()
        .push(view_top_bar(&ctx))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(ctx.i18n.tr("window-title"))
        .size(typography::TITLE)
        .color(ctx.scheme.text_primary);

    let toggle = theme_toggle::view(theme_toggle::ViewContext {
        i18n: ctx.i18n,
        mode: ctx.mode,
        scheme: ctx.scheme,
    })
    .map(Message::ThemeToggle);

    let bar = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(space::horizontal())
        .push(toggle);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::surface(ctx.scheme.surface_secondary))
        .into()
}

fn view_slider<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let rail = thumbnail_rail::view(thumbnail_rail::ViewContext {
        i18n: ctx.i18n,
        scheme: ctx.scheme,
        slides: ctx.slides,
        selected: ctx.gallery.selected_index(),
    })
    .map(Message::Rail);

    let slide = &ctx.slides[ctx.gallery.selected_index()];

    let main = viewport::view(viewport::ViewContext {
        i18n: ctx.i18n,
        scheme: ctx.scheme,
        slide: &slide.full,
        position: ctx.gallery.position(),
        label: ctx.gallery.label(),
    })
    .map(Message::Viewport);

    Row::new()
        .push(rail)
        .push(main)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
