// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Framed card holding the artwork image: white surface, black frame.
pub fn artwork_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::BLACK,
            width: border::WIDTH_MD,
            radius: radius::NONE.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Muted plaque behind the title/artist/year block.
pub fn info_plaque(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_VARIANT)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
