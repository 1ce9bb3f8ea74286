// SPDX-License-Identifier: MPL-2.0
//! Window icon loading.
//!
//! Rasterizes the embedded branding SVG at runtime for the title bar and
//! falls back to `None` (no icon) when parsing or rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SIZE: u32 = 128;

/// Rasterizes the embedded SVG icon to an RGBA window icon.
pub fn load_window_icon() -> Option<Icon> {
    // Embedded so packaging does not need to locate assets on disk.
    const SVG_SOURCE: &str = include_str!("../assets/branding/iced_slider.svg");

    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let orig_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / orig_size.width(),
        ICON_SIZE as f32 / orig_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.take(), ICON_SIZE, ICON_SIZE).ok()
}
