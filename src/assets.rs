// SPDX-License-Identifier: MPL-2.0
//! Embedded artwork images and their resolution into Iced image handles.
//!
//! The navigation core treats an artwork's image reference as an opaque
//! identifier; this module is the only place that knows the identifier names
//! a file under `assets/artworks/`.

use crate::error::{Error, Result};
use iced::widget::image;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct ArtworkAssets;

/// Resolves an opaque artwork image identifier to a displayable handle.
///
/// Decoding is deferred to the Iced image pipeline; this only hands over the
/// embedded bytes. Fails with [`Error::Asset`] if no asset matches.
pub fn artwork_image(image_id: &str) -> Result<image::Handle> {
    let file = ArtworkAssets::get(image_id)
        .ok_or_else(|| Error::Asset(format!("missing embedded artwork: {}", image_id)))?;
    Ok(image::Handle::from_bytes(file.data.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn every_builtin_artwork_has_an_embedded_image() {
        for artwork in Catalog::builtin().iter() {
            assert!(
                artwork_image(artwork.image_id()).is_ok(),
                "no embedded asset for {}",
                artwork.image_id()
            );
        }
    }

    #[test]
    fn unknown_identifier_is_an_asset_error() {
        let err = artwork_image("no-such-artwork.png").unwrap_err();
        assert!(matches!(err, Error::Asset(_)));
    }
}
