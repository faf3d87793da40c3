// SPDX-License-Identifier: MPL-2.0
//! Previous/next navigation buttons, disabled at the catalog boundaries.

use super::component::{Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the navigation button row.
///
/// A button only gets an `on_press` handler while its transition is
/// permitted; without one, Iced renders it in the disabled state.
pub fn view<'a>(ctx: ViewContext<'a>, can_go_previous: bool, can_go_next: bool) -> Element<'a, Message> {
    let previous_label = Text::new(ctx.i18n.tr("gallery-previous-button"))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);
    let previous_button = button(previous_label)
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    let previous_button = if can_go_previous {
        previous_button.on_press(Message::NavigatePrevious)
    } else {
        previous_button
    };

    let next_label = Text::new(ctx.i18n.tr("gallery-next-button"))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);
    let next_button = button(next_label)
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    let next_button = if can_go_next {
        next_button.on_press(Message::NavigateNext)
    } else {
        next_button
    };

    Row::new()
        .spacing(spacing::LG)
        .push(previous_button)
        .push(next_button)
        .into()
}
