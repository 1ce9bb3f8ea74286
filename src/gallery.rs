// SPDX-License-Identifier: MPL-2.0
//! Gallery selection and navigation state.
//!
//! The [`Gallery`] keeps an ordered slide list and a single selection cursor.
//! Navigation wraps at both ends, and selection by index is a defensive no-op
//! for out-of-range values; callers are expected to pass indices taken from
//! the rendered thumbnail rail. The cursor is always a valid index while the
//! slide list is non-empty.

use std::path::{Path, PathBuf};

/// Conventional folder for the fixed slide list.
pub const DEFAULT_SLIDE_DIR: &str = "assets/slider";

/// Number of slides in the conventional list (`1.jpg` .. `6.jpg`).
pub const DEFAULT_SLIDE_COUNT: usize = 6;

/// Builds the statically-known slide list for a folder: `1.jpg` through
/// `6.jpg`, in order. No directory scanning takes place.
#[must_use]
pub fn default_slides(dir: &Path) -> Vec<PathBuf> {
    (1..=DEFAULT_SLIDE_COUNT)
        .map(|n| dir.join(format!("{n}.jpg")))
        .collect()
}

/// Ordered slide list plus selection cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    slides: Vec<PathBuf>,
    selected: usize,
}

impl Gallery {
    /// Creates a gallery over the given slides with the first one selected.
    #[must_use]
    pub fn new(slides: Vec<PathBuf>) -> Self {
        Self {
            slides,
            selected: 0,
        }
    }

    /// Sets the cursor to `index` if it addresses a slide; out-of-range
    /// indices leave the cursor untouched.
    pub fn select(&mut self, index: usize) {
        if index < self.slides.len() {
            self.selected = index;
        }
    }

    /// Advances the cursor, wrapping from the last slide to the first.
    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.selected = (self.selected + 1) % self.slides.len();
        }
    }

    /// Moves the cursor back, wrapping from the first slide to the last.
    pub fn previous(&mut self) {
        if !self.slides.is_empty() {
            let len = self.slides.len();
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Path of the currently selected slide, `None` when the list is empty.
    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.slides.get(self.selected).map(PathBuf::as_path)
    }

    /// Current cursor value. Only meaningful while the gallery is non-empty.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// 1-based position of the selection for counters and placeholder text.
    #[must_use]
    pub fn position(&self) -> usize {
        self.selected + 1
    }

    /// Display label for the current slide: the final path segment.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.current()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// All slides in order, for rendering the thumbnail rail.
    #[must_use]
    pub fn slides(&self) -> &[PathBuf] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(default_slides(Path::new(DEFAULT_SLIDE_DIR)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_of(len: usize) -> Gallery {
        Gallery::new(
            (1..=len)
                .map(|n| PathBuf::from(format!("assets/slider/{n}.jpg")))
                .collect(),
        )
    }

    #[test]
    fn default_slides_are_six_numbered_jpegs() {
        let slides = default_slides(Path::new("assets/slider"));
        assert_eq!(slides.len(), DEFAULT_SLIDE_COUNT);
        assert_eq!(slides[0], PathBuf::from("assets/slider/1.jpg"));
        assert_eq!(slides[5], PathBuf::from("assets/slider/6.jpg"));
    }

    #[test]
    fn select_sets_cursor_for_every_valid_index() {
        let mut gallery = gallery_of(6);
        for i in 0..6 {
            gallery.select(i);
            assert_eq!(gallery.selected_index(), i);
        }
    }

    #[test]
    fn select_out_of_range_is_a_no_op() {
        let mut gallery = gallery_of(3);
        gallery.select(2);
        gallery.select(3);
        assert_eq!(gallery.selected_index(), 2);
        gallery.select(usize::MAX);
        assert_eq!(gallery.selected_index(), 2);
    }

    #[test]
    fn next_then_previous_is_identity_from_any_start() {
        for start in 0..6 {
            let mut gallery = gallery_of(6);
            gallery.select(start);
            gallery.next();
            gallery.previous();
            assert_eq!(gallery.selected_index(), start);

            gallery.previous();
            gallery.next();
            assert_eq!(gallery.selected_index(), start);
        }
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut gallery = gallery_of(6);
        gallery.select(5);
        gallery.next();
        assert_eq!(gallery.selected_index(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut gallery = gallery_of(6);
        gallery.previous();
        assert_eq!(gallery.selected_index(), 5);
    }

    #[test]
    fn single_slide_navigation_stays_put() {
        let mut gallery = gallery_of(1);
        gallery.next();
        assert_eq!(gallery.selected_index(), 0);
        gallery.previous();
        assert_eq!(gallery.selected_index(), 0);
    }

    #[test]
    fn empty_gallery_navigation_is_safe() {
        let mut gallery = Gallery::new(Vec::new());
        gallery.next();
        gallery.previous();
        gallery.select(0);
        assert!(gallery.is_empty());
        assert_eq!(gallery.current(), None);
        assert_eq!(gallery.label(), None);
    }

    #[test]
    fn label_is_final_path_segment() {
        let mut gallery = gallery_of(6);
        gallery.select(2);
        assert_eq!(gallery.label().as_deref(), Some("3.jpg"));
    }

    #[test]
    fn position_is_one_based() {
        let mut gallery = gallery_of(6);
        gallery.select(4);
        assert_eq!(gallery.position(), 5);
    }
}
