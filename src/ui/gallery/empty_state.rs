// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the catalog holds no artworks.
//!
//! The built-in catalog is never empty, so this only shows up for custom
//! builds that ship without artworks.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state view.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("gallery-empty-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr("gallery-empty-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
