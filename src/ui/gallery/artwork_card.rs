// SPDX-License-Identifier: MPL-2.0
//! Framed card presenting the current artwork image.

use super::component::{Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the artwork inside a white, black-framed card.
///
/// When the image handle could not be resolved, a localized placeholder text
/// takes its place so the layout stays stable.
pub fn view<'a>(ctx: ViewContext<'a>, handle: Option<&'a image::Handle>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match handle {
        Some(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(
            Text::new(ctx.i18n.tr("gallery-image-missing"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into(),
    };

    Container::new(content)
        .width(Length::Fixed(sizing::ARTWORK_WIDTH))
        .height(Length::Fixed(sizing::ARTWORK_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::artwork_card)
        .into()
}
