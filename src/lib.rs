// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen art gallery viewer built with the Iced GUI framework.
//!
//! It displays one artwork at a time (image, title, artist, year) from a
//! fixed built-in catalog, with boundary-gated previous/next navigation.
//! Demonstrates internationalization with Fluent, embedded assets, and
//! modular UI design.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod error;
pub mod gallery_navigation;
pub mod i18n;
pub mod icon;
pub mod ui;
