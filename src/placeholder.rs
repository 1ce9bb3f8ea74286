// SPDX-License-Identifier: MPL-2.0
//! Generated placeholder graphics for slides that fail to load.
//!
//! A failing slide is replaced by a flat panel embedding its 1-based position
//! as text, in a square thumbnail variant and a 4:3 viewport variant, so the
//! layout never collapses around a missing file. The graphic is produced by
//! rasterizing a generated SVG with resvg, the same mechanism used for the
//! window icon.

use crate::error::{Error, Result};
use crate::media::SlideImage;
use resvg::usvg;

/// Edge length of the square thumbnail placeholder.
pub const THUMB_SIZE: u32 = 64;

/// Dimensions of the main-viewport placeholder.
pub const VIEWPORT_WIDTH: u32 = 800;
pub const VIEWPORT_HEIGHT: u32 = 600;

/// Square placeholder for the thumbnail rail, labeled with the slide's
/// 1-based position.
pub fn thumbnail(position: usize) -> Result<SlideImage> {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}' \
         viewBox='0 0 {size} {size}'>\
         <rect width='{size}' height='{size}' fill='#374151'/>\
         <text x='32' y='32' font-family='monospace' font-size='12' fill='#6b7280' \
         text-anchor='middle' dy='.3em'>{position}</text></svg>",
        size = THUMB_SIZE,
    );
    rasterize(&svg, THUMB_SIZE, THUMB_SIZE)
}

/// Wide placeholder for the main viewport, labeled `Image N`.
pub fn viewport(position: usize) -> Result<SlideImage> {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' \
         viewBox='0 0 {w} {h}'>\
         <rect width='{w}' height='{h}' fill='#1f2937'/>\
         <text x='400' y='300' font-family='monospace' font-size='24' fill='#6b7280' \
         text-anchor='middle' dy='.3em'>Image {position}</text></svg>",
        w = VIEWPORT_WIDTH,
        h = VIEWPORT_HEIGHT,
    );
    rasterize(&svg, VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
}

/// Rasterizes generated SVG markup to an RGBA slide image.
fn rasterize(svg: &str, width: u32, height: u32) -> Result<SlideImage> {
    let mut options = usvg::Options::default();
    // Without system fonts the label is skipped but the panel still renders.
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
        .map_err(|e| Error::Svg(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("failed to allocate pixmap".to_string()))?;

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    Ok(SlideImage::from_rgba(width, height, pixmap.take()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_has_square_dimensions() {
        let slide = thumbnail(1).expect("render failed");
        assert_eq!((slide.width, slide.height), (THUMB_SIZE, THUMB_SIZE));
    }

    #[test]
    fn viewport_has_four_by_three_dimensions() {
        let slide = viewport(6).expect("render failed");
        assert_eq!(
            (slide.width, slide.height),
            (VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
        );
    }

    #[test]
    fn rasterize_accepts_generated_markup() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' width='8' height='8'>\
                   <rect width='8' height='8' fill='#374151'/></svg>";
        let slide = rasterize(svg, 8, 8).expect("render failed");
        assert_eq!((slide.width, slide.height), (8, 8));
    }

    #[test]
    fn rasterize_rejects_malformed_svg() {
        let result = rasterize("<svg", 8, 8);
        assert!(result.is_err());
    }
}
