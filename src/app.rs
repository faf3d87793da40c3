// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery screen.
//!
//! The `App` struct wires together the domains (gallery, localization) and
//! translates top-level messages into gallery transitions. Window policy
//! (default and minimum sizes, icon) stays close to the main update loop so
//! user-facing behavior is easy to audit.
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, component};
use iced::{keyboard, window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the gallery component and
/// localization.
pub struct App {
    pub i18n: I18n,
    gallery: component::State,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Gallery(component::Message),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cursor", &self.gallery.cursor())
            .field("has_image", &self.gallery.has_image())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: component::State::new(Catalog::builtin()),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang);
        let app = App {
            i18n,
            ..Self::default()
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => self.gallery.update(msg),
        }
        Task::none()
    }

    /// ArrowLeft/ArrowRight mirror the previous/next buttons. The gallery
    /// component keeps out-of-bounds transitions as no-ops, so no gating is
    /// needed here.
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                Some(Message::Gallery(component::Message::NavigatePrevious))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                Some(Message::Gallery(component::Message::NavigateNext))
            }
            _ => None,
        })
    }

    fn view(&self) -> Element<'_, Message> {
        self.gallery
            .view(gallery::ViewContext { i18n: &self.i18n })
            .map(Message::Gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_on_first_artwork() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.gallery.cursor(), 0);
        assert!(!app.gallery.can_go_previous());
        assert!(app.gallery.can_go_next());
    }

    #[test]
    fn gallery_messages_move_the_cursor() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(component::Message::NavigateNext));
        let _ = app.update(Message::Gallery(component::Message::NavigateNext));
        assert_eq!(app.gallery.cursor(), 2);

        let _ = app.update(Message::Gallery(component::Message::NavigatePrevious));
        assert_eq!(app.gallery.cursor(), 1);
    }

    #[test]
    fn title_is_localized() {
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
        });
        assert_eq!(app.title(), "Art Space");
    }

    #[test]
    fn cli_lang_flag_selects_locale() {
        let (app, _task) = App::new(Flags {
            lang: Some("fr".to_string()),
        });
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn view_renders_without_panicking() {
        let app = App::default();
        let _element = app.view();
    }
}
