// SPDX-License-Identifier: MPL-2.0
//! Plaque below the artwork: title, artist with year, position indicator.

use super::component::Message;
use crate::catalog::Artwork;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Renders the artwork information plaque.
///
/// `cursor` is the zero-based catalog position; the indicator shows it
/// one-based, museum-label style.
pub fn view(artwork: &Artwork, cursor: usize, total: usize) -> Element<'_, Message> {
    let title = Text::new(artwork.title()).size(typography::TITLE_LG);

    let byline = Text::new(format!("{} ({})", artwork.artist(), artwork.year()))
        .size(typography::BODY_LG)
        .color(palette::GRAY_700);

    let position = Text::new(format!("{} / {}", cursor + 1, total))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(byline)
        .push(position);

    Container::new(content)
        .width(Length::Fixed(sizing::ARTWORK_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::info_plaque)
        .into()
}
