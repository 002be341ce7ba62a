//! Derived color operations and accessibility metrics
//!
//! - complementary color (180° hue rotation in HSL)
//! - random color generation through an injectable `rand::Rng`
//! - WCAG relative luminance and contrast ratio
//! - light/dark classification for overlay text legibility
//!
//! The hex-taking functions return `None` for malformed input instead of
//! guessing; `is_light_color` is the exception and classifies unparsable
//! input as dark, matching the original UI's white-text fallback.

use rand::Rng;

use crate::color::conversion::{hsl_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl};
use crate::color::model::Rgb;
use crate::constants::wcag;

/// Complementary hue rotation in degrees
const COMPLEMENTARY_ROTATION: u16 = 180;

/// Draw a random color from the given random source
///
/// Three independent uniform draws in `[0, 255]`, formatted as uppercase
/// hex. Deterministic tests can pass a seeded `StdRng`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    rgb_to_hex(Rgb::new(rng.gen(), rng.gen(), rng.gen()))
}

/// Draw a random color from the process-wide random source
pub fn generate_random_color() -> String {
    random_color(&mut rand::thread_rng())
}

/// Compute the complementary color of a hex color
///
/// Converts to HSL, rotates the hue by 180°, and re-encodes as hex.
/// Saturation and lightness are preserved. Returns `None` for malformed
/// input.
pub fn complementary_color(hex: &str) -> Option<String> {
    let rgb = parse_hex(hex)?;
    let rotated = rgb_to_hsl(rgb).rotate(COMPLEMENTARY_ROTATION);
    Some(rgb_to_hex(hsl_to_rgb(rotated)))
}

/// WCAG relative luminance of an RGB color, in `[0, 1]`
///
/// Each channel is normalized to `[0, 1]`, linearized (values at or below
/// 0.03928 divide by 12.92, the rest pass through the
/// `((c + 0.055) / 1.055)^2.4` gamma curve), then combined with the
/// 0.2126 / 0.7152 / 0.0722 perceptual weights.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linearize = |channel: u8| {
        let c = channel as f64 / 255.0;
        if c <= wcag::LINEAR_THRESHOLD {
            c / wcag::LINEAR_DIVISOR
        } else {
            ((c + wcag::GAMMA_OFFSET) / (1.0 + wcag::GAMMA_OFFSET)).powf(wcag::GAMMA_EXPONENT)
        }
    };

    wcag::RED_WEIGHT * linearize(rgb.r)
        + wcag::GREEN_WEIGHT * linearize(rgb.g)
        + wcag::BLUE_WEIGHT * linearize(rgb.b)
}

/// WCAG contrast ratio between two hex colors, always ≥ 1
///
/// `(L1 + 0.05) / (L2 + 0.05)` with L1 the greater luminance. Returns
/// `None` when either input is malformed.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> Option<f64> {
    let lum_a = relative_luminance(parse_hex(hex_a)?);
    let lum_b = relative_luminance(parse_hex(hex_b)?);
    Some(contrast_from_luminances(lum_a, lum_b))
}

/// Contrast ratio from two already-computed relative luminances
pub fn contrast_from_luminances(lum_a: f64, lum_b: f64) -> f64 {
    let (lighter, darker) = if lum_a >= lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };
    (lighter + wcag::CONTRAST_OFFSET) / (darker + wcag::CONTRAST_OFFSET)
}

/// Whether a color is light enough to carry black overlay text
///
/// True when relative luminance exceeds 0.5. Malformed input classifies
/// as dark.
pub fn is_light_color(hex: &str) -> bool {
    parse_hex(hex)
        .map(relative_luminance)
        .is_some_and(|lum| lum > wcag::LIGHT_LUMINANCE_THRESHOLD)
}

/// Whether a contrast ratio satisfies WCAG AA for normal text (4.5:1)
pub fn meets_aa(ratio: f64) -> bool {
    ratio >= wcag::AA_NORMAL_TEXT
}

/// Whether a contrast ratio satisfies WCAG AAA for normal text (7:1)
pub fn meets_aaa(ratio: f64) -> bool {
    ratio >= wcag::AAA_NORMAL_TEXT
}
