// SPDX-License-Identifier: MPL-2.0
//! Empty state shown when the gallery has no slides.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};

/// Render the empty-gallery view.
pub fn view<'a, M: 'a>(i18n: &I18n, scheme: &ColorScheme) -> Element<'a, M> {
    let icon = icons::sized(icons::image(), sizing::ICON_XL, scheme.text_secondary);

    let title = iced::widget::text(i18n.tr("empty-state-title"))
        .size(typography::TITLE)
        .color(scheme.text_secondary);

    let subtitle = iced::widget::text(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .color(scheme.text_secondary);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle);

    let frame = Container::new(content)
        .padding(spacing::XL)
        .style(styles::empty_frame(scheme));

    Container::new(frame)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::surface(scheme.surface_primary))
        .into()
}
