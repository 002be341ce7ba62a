//! # colorkit
//!
//! A pure, stateless color conversion and palette generation library.
//!
//! This crate provides the math behind a color picker:
//! - Parsing and formatting `#RRGGBB` hex colors
//! - Conversions between RGB, HSL, HSV, and CMYK
//! - WCAG relative luminance, contrast ratios, and light/dark classification
//! - Harmonious palette generation with theme classification
//!
//! ## Example
//!
//! ```rust
//! use colorkit::inspect;
//!
//! let report = inspect("#3B82F6")?;
//! assert_eq!(report.rgb.r, 59);
//! assert_eq!(report.hsl.h, 217);
//! assert!(!report.is_light);
//! # Ok::<(), colorkit::ColorError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;

pub use color::analysis::{
    complementary_color, contrast_ratio, generate_random_color, is_light_color, meets_aa,
    meets_aaa, random_color, relative_luminance,
};
pub use color::conversion::{
    hsl_to_rgb, normalize_hex, parse_hex, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
};
pub use color::model::{Cmyk, Hsl, Hsv, Rgb};
pub use config::GeneratorConfig;
pub use error::{ColorError, Result};
pub use generator::{classify_palette_theme, Harmony, Palette, PaletteGenerator};

use color::analysis::contrast_from_luminances;

/// Complete view of one color across every representation the library
/// supports, plus its accessibility metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Canonical uppercase `#RRGGBB` form
    pub hex: String,
    /// RGB channels `[0, 255]`
    pub rgb: Rgb,
    /// HSL representation (degrees / percent)
    pub hsl: Hsl,
    /// HSV representation (degrees / percent)
    pub hsv: Hsv,
    /// CMYK representation (percent)
    pub cmyk: Cmyk,
    /// Complementary color, hex-encoded
    pub complementary: String,
    /// WCAG relative luminance, `[0, 1]`
    pub luminance: f64,
    /// Contrast ratio against white text
    pub contrast_white: f64,
    /// Contrast ratio against black text
    pub contrast_black: f64,
    /// Whether overlay text should be black (light color) or white (dark)
    pub is_light: bool,
}

/// Inspect a hex color: parse it and compute every representation and
/// accessibility metric in one call
///
/// This is the main entry point for picker-style consumers; the fields of
/// the returned [`ColorReport`] map one-to-one onto what a conversion card
/// displays.
///
/// # Errors
///
/// Returns [`ColorError`] when the input is not a valid 6-digit hex color.
pub fn inspect(hex: &str) -> Result<ColorReport> {
    let rgb = Rgb::from_hex(hex)?;
    let hsl = rgb_to_hsl(rgb);
    let luminance = relative_luminance(rgb);

    let complementary = rgb_to_hex(hsl_to_rgb(hsl.rotate(180)));
    let white = relative_luminance(Rgb::new(255, 255, 255));
    let black = relative_luminance(Rgb::new(0, 0, 0));

    Ok(ColorReport {
        hex: rgb.to_hex(),
        rgb,
        hsl,
        hsv: rgb_to_hsv(rgb),
        cmyk: rgb_to_cmyk(rgb),
        complementary,
        luminance,
        contrast_white: contrast_from_luminances(luminance, white),
        contrast_black: contrast_from_luminances(luminance, black),
        is_light: luminance > constants::wcag::LIGHT_LUMINANCE_THRESHOLD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_known_color() {
        let report = inspect("#3b82f6").unwrap();

        assert_eq!(report.hex, "#3B82F6");
        assert_eq!(report.rgb, Rgb::new(59, 130, 246));
        assert_eq!(report.hsl, Hsl { h: 217, s: 91, l: 60 });
        assert_eq!(report.hsv, Hsv { h: 217, s: 76, v: 96 });
        assert_eq!(report.cmyk, Cmyk { c: 76, m: 47, y: 0, k: 4 });
        assert!(!report.is_light);
        assert!(report.contrast_white > 1.0);
        assert!(report.contrast_black > 1.0);
    }

    #[test]
    fn test_inspect_rejects_malformed() {
        assert!(inspect("not-a-color").is_err());
        assert!(inspect("#12345").is_err());
    }

    #[test]
    fn test_inspect_contrast_consistency() {
        // the two contrast figures must agree with the standalone function
        let report = inspect("#C81E50").unwrap();

        let against_white = contrast_ratio("#C81E50", "#FFFFFF").unwrap();
        let against_black = contrast_ratio("#C81E50", "#000000").unwrap();

        assert!((report.contrast_white - against_white).abs() < 1e-12);
        assert!((report.contrast_black - against_black).abs() < 1e-12);
    }

    #[test]
    fn test_color_report_serialization() {
        let report = inspect("#3B82F6").unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ColorReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report, deserialized);
    }
}
