// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Uses the project SVG and rasterizes it at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::error::{Error, Result};
use iced::window::{icon, Icon};
use resvg::usvg;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    match render_icon() {
        Ok(icon) => Some(icon),
        Err(err) => {
            eprintln!("Failed to render window icon: {}", err);
            None
        }
    }
}

fn render_icon() -> Result<Icon> {
    // Embed the SVG so packaging does not need to locate assets on disk.
    const SVG_SOURCE: &str = include_str!("../assets/branding/art_space.svg");

    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default())
        .map_err(|err| Error::Svg(err.to_string()))?;

    let target = 128u32;
    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)
        .ok_or_else(|| Error::Svg("failed to allocate pixmap".to_string()))?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), target, target)
        .map_err(|err| Error::Svg(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_svg_renders_to_an_icon() {
        assert!(render_icon().is_ok());
    }
}
