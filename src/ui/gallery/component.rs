// SPDX-License-Identifier: MPL-2.0
//! Gallery component state and update logic.
//!
//! Holds the [`GalleryNavigator`] (catalog + cursor) and the resolved image
//! handle for the artwork on display. Both button presses and keyboard
//! shortcuts arrive here as messages; the transitions themselves stay safe
//! no-ops at the boundaries even if a message slips past a disabled control.

use crate::assets;
use crate::catalog::{Artwork, Catalog};
use crate::gallery_navigation::GalleryNavigator;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{image, Column, Container, Space};
use iced::{alignment, Element, Length};

use super::{artwork_card, controls, empty_state, info_panel};

/// Gallery screen state for one viewing session.
///
/// The cursor starts at the first artwork on every fresh screen entry; there
/// is no persistence across sessions.
#[derive(Debug, Clone)]
pub struct State {
    navigator: GalleryNavigator,
    current_image: Option<image::Handle>,
}

/// Messages produced by the gallery controls and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NavigatePrevious,
    NavigateNext,
}

/// Read-only context the views need besides the component state.
#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Creates a gallery session positioned on the first artwork.
    pub fn new(catalog: Catalog) -> Self {
        let navigator = GalleryNavigator::new(catalog);
        let current_image = resolve_image(&navigator);
        Self {
            navigator,
            current_image,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NavigatePrevious => self.navigator.go_previous(),
            Message::NavigateNext => self.navigator.go_next(),
        }
        self.current_image = resolve_image(&self.navigator);
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let artwork = match self.navigator.current() {
            Ok(artwork) => artwork,
            Err(_) => return empty_state::view(ctx.i18n),
        };

        let card = artwork_card::view(ctx.clone(), self.current_image.as_ref());
        let plaque = info_panel::view(
            artwork,
            self.navigator.cursor(),
            self.navigator.len(),
        );
        let buttons = controls::view(ctx, self.can_go_previous(), self.can_go_next());

        let content = Column::new()
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::MD)
            .push(Space::new(Length::Shrink, Length::Fill))
            .push(card)
            .push(Space::new(Length::Shrink, Length::Fixed(spacing::LG)))
            .push(plaque)
            .push(Space::new(Length::Shrink, Length::Fill))
            .push(buttons);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    }

    /// The artwork currently on display, unless the catalog is empty.
    pub fn artwork(&self) -> Option<&Artwork> {
        self.navigator.current().ok()
    }

    pub fn can_go_previous(&self) -> bool {
        self.navigator.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.navigator.can_go_next()
    }

    pub fn cursor(&self) -> usize {
        self.navigator.cursor()
    }

    pub fn has_image(&self) -> bool {
        self.current_image.is_some()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Resolves the image handle for the artwork under the cursor.
/// A missing asset is logged and rendered as a placeholder, not a failure.
fn resolve_image(navigator: &GalleryNavigator) -> Option<image::Handle> {
    let artwork = navigator.current().ok()?;
    match assets::artwork_image(artwork.image_id()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to load artwork image: {}", err);
            None
        }
    }
}
