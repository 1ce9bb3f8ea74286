// SPDX-License-Identifier: MPL-2.0
//! UI components and styling for the slider window.

pub mod design_tokens;
pub mod empty_state;
pub mod icons;
pub mod styles;
pub mod theme_toggle;
pub mod theming;
pub mod thumbnail_rail;
pub mod viewport;
