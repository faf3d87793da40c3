// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: one artwork at a time with previous/next navigation.
//!
//! Split into a component (state + update) and small view functions so the
//! render stays a pure function of (catalog, cursor):
//!
//! - [`component`] - State, messages, and update logic
//! - [`artwork_card`] - Framed picture card
//! - [`info_panel`] - Title/artist/year plaque with position indicator
//! - [`controls`] - Boundary-gated previous/next buttons
//! - [`empty_state`] - Placeholder shown when the catalog is empty

pub mod artwork_card;
pub mod component;
pub mod controls;
pub mod empty_state;
pub mod info_panel;

pub use component::{Message, State, ViewContext};
