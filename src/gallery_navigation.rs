// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation module for managing the artwork cursor.
//!
//! This module provides a `GalleryNavigator` that owns the catalog and the
//! cursor into it, giving the UI a single source of truth for which artwork
//! is on display and which transitions are currently permitted.

use crate::catalog::{Artwork, Catalog};
use crate::error::{Error, Result};

/// Manages navigation through the artworks of a fixed catalog.
///
/// The cursor always satisfies `0 <= cursor <= len - 1` for a non-empty
/// catalog. The invariant is maintained by gating transitions up front, never
/// by clamping after the fact: a transition that would step outside the
/// catalog is a no-op, and the UI is expected to disable the corresponding
/// control via [`GalleryNavigator::can_go_previous`] /
/// [`GalleryNavigator::can_go_next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    catalog: Catalog,
    cursor: usize,
}

impl GalleryNavigator {
    /// Creates a navigator positioned on the first artwork.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, cursor: 0 }
    }

    /// Returns the artwork under the cursor.
    ///
    /// Fails with [`Error::OutOfRange`] only when the catalog is empty;
    /// callers showing a fixed non-empty catalog can rely on this succeeding.
    pub fn current(&self) -> Result<&Artwork> {
        self.catalog.get(self.cursor).ok_or(Error::OutOfRange)
    }

    /// Checks if a previous artwork exists.
    pub fn can_go_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Checks if a next artwork exists.
    pub fn can_go_next(&self) -> bool {
        self.cursor + 1 < self.catalog.len()
    }

    /// Steps back one artwork. No-op at the first artwork.
    pub fn go_previous(&mut self) {
        if self.can_go_previous() {
            self.cursor -= 1;
        }
    }

    /// Steps forward one artwork. No-op at the last artwork.
    pub fn go_next(&mut self) {
        if self.can_go_next() {
            self.cursor += 1;
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the total number of artworks in the catalog.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for GalleryNavigator {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
