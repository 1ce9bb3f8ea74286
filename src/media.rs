// SPDX-License-Identifier: MPL-2.0
//! Decoding slide files into Iced image handles.
//!
//! Only still images are supported (PNG, JPEG, GIF, WebP, BMP). Decode
//! failures bubble up as [`Error::Image`](crate::error::Error) so the caller
//! can substitute a generated placeholder; nothing here panics on bad files.

use crate::error::Result;
use crate::placeholder;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// A decoded slide ready for display.
#[derive(Debug, Clone)]
pub struct SlideImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl SlideImage {
    /// Wraps raw RGBA pixels in a display handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Reads and decodes an image file.
pub fn load_image(path: &Path) -> Result<SlideImage> {
    let decoded = image_rs::open(path)?;
    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_raw();
    Ok(SlideImage::from_rgba(width, height, pixels))
}

/// A slide as shown on screen: thumbnail and viewport variants.
///
/// Successful decodes share one handle for both; failed decodes get distinct
/// generated placeholders sized for each context.
#[derive(Debug, Clone)]
pub struct LoadedSlide {
    pub thumbnail: SlideImage,
    pub full: SlideImage,
}

/// Loads a slide, silently substituting placeholders on failure.
///
/// `position` is the slide's 1-based position, embedded as text in the
/// placeholder variants. No error ever reaches the caller; a slide that fails
/// to decode still occupies its spot in the rail and viewport.
#[must_use]
pub fn load_slide(path: &Path, position: usize) -> LoadedSlide {
    match load_image(path) {
        Ok(image) => LoadedSlide {
            thumbnail: image.clone(),
            full: image,
        },
        Err(_) => LoadedSlide {
            thumbnail: placeholder::thumbnail(position).unwrap_or_else(|_| blank()),
            full: placeholder::viewport(position).unwrap_or_else(|_| blank()),
        },
    }
}

/// Last-resort 1x1 transparent slide if even placeholder rendering fails.
fn blank() -> SlideImage {
    SlideImage::from_rgba(1, 1, vec![0; 4])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_image_decodes_a_png() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("slide.png");
        image_rs::RgbaImage::new(4, 3)
            .save(&path)
            .expect("failed to write test png");

        let slide = load_image(&path).expect("decode failed");
        assert_eq!((slide.width, slide.height), (4, 3));
    }

    #[test]
    fn load_image_rejects_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_image(&temp_dir.path().join("absent.jpg"));
        assert!(result.is_err());
    }

    #[test]
    fn load_image_rejects_non_image_data() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("not-an-image.jpg");
        std::fs::write(&path, b"plain text").expect("failed to write file");

        assert!(load_image(&path).is_err());
    }

    #[test]
    fn from_rgba_preserves_dimensions() {
        let slide = SlideImage::from_rgba(2, 2, vec![0u8; 16]);
        assert_eq!((slide.width, slide.height), (2, 2));
    }

    #[test]
    fn load_slide_substitutes_placeholders_for_missing_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let slide = load_slide(&temp_dir.path().join("missing.jpg"), 3);

        assert_eq!(slide.thumbnail.width, placeholder::THUMB_SIZE);
        assert_eq!(slide.full.width, placeholder::VIEWPORT_WIDTH);
        assert_eq!(slide.full.height, placeholder::VIEWPORT_HEIGHT);
    }

    #[test]
    fn load_slide_keeps_decoded_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("slide.png");
        image_rs::RgbaImage::new(5, 7)
            .save(&path)
            .expect("failed to write test png");

        let slide = load_slide(&path, 1);
        assert_eq!((slide.full.width, slide.full.height), (5, 7));
        assert_eq!(slide.thumbnail.handle.id(), slide.full.handle.id());
    }
}
