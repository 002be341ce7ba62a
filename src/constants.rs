//! Reference values and tuning constants for color math
//!
//! This module contains compile-time constants for the WCAG accessibility
//! formulas, the palette generator's "pleasant" value bands, and the theme
//! classification buckets.

/// WCAG 2.x relative luminance and contrast constants
///
/// Source: WCAG 2.1, "relative luminance" and "contrast ratio" definitions.
/// The UI compares contrast results against these thresholds, so the values
/// must match the standard exactly.
pub mod wcag {
    /// Perceptual weight of the red channel
    pub const RED_WEIGHT: f64 = 0.2126;

    /// Perceptual weight of the green channel
    pub const GREEN_WEIGHT: f64 = 0.7152;

    /// Perceptual weight of the blue channel
    pub const BLUE_WEIGHT: f64 = 0.0722;

    /// Channel values at or below this threshold linearize by simple division
    pub const LINEAR_THRESHOLD: f64 = 0.03928;

    /// Divisor for the low-value linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset in the gamma-correction branch: ((c + 0.055) / 1.055)^2.4
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Exponent in the gamma-correction branch
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Additive constant in the contrast ratio: (L1 + 0.05) / (L2 + 0.05)
    pub const CONTRAST_OFFSET: f64 = 0.05;

    /// Minimum contrast for normal text at AA conformance
    pub const AA_NORMAL_TEXT: f64 = 4.5;

    /// Minimum contrast for large text at AA conformance
    pub const AA_LARGE_TEXT: f64 = 3.0;

    /// Minimum contrast for normal text at AAA conformance
    pub const AAA_NORMAL_TEXT: f64 = 7.0;

    /// Luminance above this value classifies a color as "light"
    /// (overlay text is drawn black on light colors, white on dark ones)
    pub const LIGHT_LUMINANCE_THRESHOLD: f64 = 0.5;
}

/// Palette generation value bands
///
/// Saturation and lightness are drawn from mid-to-high bands to avoid muddy
/// or oversaturated palettes. The lightness spread drives the tint/shade
/// progression across a palette.
pub mod generation {
    /// Maximum number of colors in a generated palette
    pub const MAX_PALETTE_COLORS: usize = 12;

    /// Base saturation band, percent
    pub const SATURATION_MIN: u8 = 55;
    pub const SATURATION_MAX: u8 = 90;

    /// Base lightness band, percent
    pub const LIGHTNESS_MIN: u8 = 45;
    pub const LIGHTNESS_MAX: u8 = 65;

    /// Total lightness variation across a palette, percent
    pub const LIGHTNESS_SPREAD: u8 = 24;

    /// Hard bounds on per-color lightness after the tint/shade offset
    pub const LIGHTNESS_FLOOR: u8 = 25;
    pub const LIGHTNESS_CEILING: u8 = 80;
}

/// Theme classification buckets
///
/// A palette's mean hue maps into one of seven named bands around the
/// hue wheel.
pub mod classification {
    /// Upper bound (exclusive) of each hue band, in degrees
    pub const HUE_BUCKETS: [f64; 7] = [30.0, 60.0, 120.0, 180.0, 240.0, 300.0, 360.0];

    /// Display label for each hue band, index-aligned with `HUE_BUCKETS`
    pub const THEME_LABELS: [&str; 7] = [
        "Warm Reds",
        "Sunny Yellows",
        "Fresh Greens",
        "Cool Cyans",
        "Deep Blues",
        "Rich Purples",
        "Vibrant Magentas",
    ];
}
