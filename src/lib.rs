// SPDX-License-Identifier: MPL-2.0
//! `iced_slider` is a small image slider built with the Iced GUI framework.
//!
//! It shows a thumbnail rail next to a main viewport, navigates a fixed slide
//! list with wraparound, and switches between light and dark themes, following
//! the system color scheme until the user makes an explicit choice.

#![doc(html_root_url = "https://docs.rs/iced_slider/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod placeholder;
pub mod theme_switcher;
pub mod ui;
