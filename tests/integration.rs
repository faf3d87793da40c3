// SPDX-License-Identifier: MPL-2.0
use art_space::catalog::Catalog;
use art_space::gallery_navigation::GalleryNavigator;
use art_space::i18n::fluent::I18n;
use art_space::ui::gallery::{Message, State, ViewContext};

#[test]
fn fresh_session_starts_at_first_artwork() {
    let state = State::new(Catalog::builtin());

    assert_eq!(state.cursor(), 0);
    assert!(!state.can_go_previous());
    assert!(state.can_go_next());
    assert_eq!(
        state.artwork().expect("builtin catalog is non-empty").title(),
        "Mountains Sun Moon"
    );
}

#[test]
fn three_next_presses_land_on_fourth_artwork() {
    let mut state = State::new(Catalog::builtin());

    state.update(Message::NavigateNext);
    state.update(Message::NavigateNext);
    state.update(Message::NavigateNext);

    assert_eq!(state.cursor(), 3);
    assert_eq!(
        state.artwork().expect("builtin catalog is non-empty").title(),
        "Mountain Sun Boho Style"
    );
    assert!(state.can_go_previous());
    assert!(state.can_go_next());
}

#[test]
fn next_at_last_artwork_is_ignored() {
    let mut state = State::new(Catalog::builtin());
    for _ in 0..4 {
        state.update(Message::NavigateNext);
    }
    assert_eq!(state.cursor(), 4);
    assert!(!state.can_go_next());

    state.update(Message::NavigateNext);

    assert_eq!(state.cursor(), 4);
    assert!(!state.can_go_next());
}

#[test]
fn four_previous_presses_return_to_first_artwork() {
    let mut state = State::new(Catalog::builtin());
    for _ in 0..4 {
        state.update(Message::NavigateNext);
    }

    for _ in 0..4 {
        state.update(Message::NavigatePrevious);
    }

    assert_eq!(state.cursor(), 0);
    assert!(!state.can_go_previous());
}

#[test]
fn cursor_never_leaves_catalog_bounds_under_message_storm() {
    let mut state = State::new(Catalog::builtin());
    let storm = [
        Message::NavigatePrevious,
        Message::NavigateNext,
        Message::NavigateNext,
        Message::NavigateNext,
        Message::NavigateNext,
        Message::NavigateNext,
        Message::NavigateNext,
        Message::NavigatePrevious,
        Message::NavigatePrevious,
        Message::NavigatePrevious,
        Message::NavigatePrevious,
        Message::NavigatePrevious,
        Message::NavigateNext,
    ];

    for message in storm {
        state.update(message);
        assert!(state.cursor() < 5);
        assert!(state.artwork().is_some());
        assert_eq!(state.can_go_previous(), state.cursor() != 0);
        assert_eq!(state.can_go_next(), state.cursor() != 4);
    }
}

#[test]
fn every_builtin_artwork_is_reachable_with_its_image() {
    let mut state = State::new(Catalog::builtin());
    let mut titles = vec![state.artwork().expect("non-empty").title().to_string()];

    while state.can_go_next() {
        state.update(Message::NavigateNext);
        assert!(state.has_image(), "artwork at {} has no image", state.cursor());
        titles.push(state.artwork().expect("non-empty").title().to_string());
    }

    assert_eq!(titles.len(), 5);
    assert_eq!(titles.first().map(String::as_str), Some("Mountains Sun Moon"));
    assert_eq!(
        titles.last().map(String::as_str),
        Some("Boho Art Minimalism Bohemian Style Art")
    );
}

#[test]
fn navigator_round_trip_restores_cursor() {
    let mut nav = GalleryNavigator::new(Catalog::builtin());
    nav.go_next();
    nav.go_next();
    let before = nav.cursor();

    nav.go_next();
    nav.go_previous();
    assert_eq!(nav.cursor(), before);

    nav.go_previous();
    nav.go_next();
    assert_eq!(nav.cursor(), before);
}

#[test]
fn gallery_renders_in_every_available_locale() {
    let state = State::new(Catalog::builtin());

    for locale in I18n::default().available_locales.clone() {
        let mut i18n = I18n::default();
        i18n.set_locale(locale);
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}

#[test]
fn language_change_via_cli_flag() {
    let i18n_en = I18n::new(Some("en-US".to_string()));
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-previous-button"), "Previous");

    let i18n_fr = I18n::new(Some("fr".to_string()));
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-previous-button"), "Précédent");
}
