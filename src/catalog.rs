// SPDX-License-Identifier: MPL-2.0
//! The artwork catalog: a fixed, ordered collection of artwork records.
//!
//! The catalog is built once at startup and never mutated afterwards, so
//! every index in `0..len()` stays valid for the lifetime of the process.

/// Metadata for a single displayable artwork.
///
/// The image reference is an opaque identifier resolved by the asset layer;
/// the navigation core never inspects it. The year is kept as text because it
/// is display-only and may hold values like "ca. 1890".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    image_id: String,
    title: String,
    artist: String,
    year: String,
}

impl Artwork {
    pub fn new(
        image_id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            image_id: image_id.into(),
            title: title.into(),
            artist: artist.into(),
            year: year.into(),
        }
    }

    /// Opaque identifier of the embedded image asset.
    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn year(&self) -> &str {
        &self.year
    }
}

/// Ordered, immutable sequence of artworks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Builds a catalog from an arbitrary list of artworks.
    ///
    /// An empty list is accepted; callers that read by index must guard with
    /// [`Catalog::is_empty`].
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }

    /// The built-in exhibition shipped with the application.
    pub fn builtin() -> Self {
        Self::new(vec![
            Artwork::new("artwork1.png", "Mountains Sun Moon", "BiancaVanDijk", "2024"),
            Artwork::new("artwork2.png", "Landscape Sun Nature", "regencygirl123", "2023"),
            Artwork::new(
                "artwork3.png",
                "Boho Art Sunset Mountains",
                "regencygirl123",
                "2021",
            ),
            Artwork::new("artwork4.png", "Mountain Sun Boho Style", "TianaZZ", "2022"),
            Artwork::new(
                "artwork5.png",
                "Boho Art Minimalism Bohemian Style Art",
                "TianaZZ",
                "2022",
            ),
        ])
    }

    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }
}
