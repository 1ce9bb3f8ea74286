// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, sizing, typography,
//! radii, and shadows. Components read from here instead of hard-coding
//! values, so the two color schemes stay consistent.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const GRAY_800: Color = Color::from_rgb(0.12, 0.16, 0.22);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.26, 0.32);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.5);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);

    // Brand colors (teal scale)
    pub const ACCENT_300: Color = Color::from_rgb(0.37, 0.92, 0.83);
    pub const ACCENT_400: Color = Color::from_rgb(0.18, 0.83, 0.75);
    pub const ACCENT_500: Color = Color::from_rgb(0.08, 0.72, 0.65);
    pub const ACCENT_600: Color = Color::from_rgb(0.05, 0.58, 0.53);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    /// Edge length of a thumbnail in the rail.
    pub const THUMBNAIL: f32 = 64.0;

    /// Width of the thumbnail rail column.
    pub const RAIL_WIDTH: f32 = 96.0;

    /// Diameter of the round navigation arrow buttons.
    pub const NAV_BUTTON: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name in the top bar.
    pub const TITLE: f32 = 20.0;

    /// Standard body text.
    pub const BODY: f32 = 14.0;

    /// Hints, counters, monospace tags.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border & Radius Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill/circle shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG < opacity::OPAQUE);

    assert!(sizing::RAIL_WIDTH > sizing::THUMBNAIL);
    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
