//! Color space conversion functions
//!
//! Pure conversions between the supported color spaces:
//! - hex string ⇄ RGB
//! - RGB ⇄ HSL
//! - RGB → HSV
//! - RGB → CMYK
//!
//! All functions are total over their documented domains. Outputs are
//! rounded to the integers the UI displays; the round trips
//! `RGB → HSL → RGB` and `RGB → HSV → RGB` reproduce the original within
//! ±1 per channel. The achromatic (max == min) and pure-black cases take
//! explicit branches so no conversion ever divides by zero.

use crate::color::model::{Cmyk, Hsl, Hsv, Rgb};

/// Parse a hex color string into an RGB triple
///
/// Accepts an optional leading `#` followed by exactly 6 hexadecimal
/// digits, case-insensitive. Any other length or character content yields
/// `None` — malformed input is absence, never a partial value.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    Rgb::from_hex(input).ok()
}

/// Format an RGB triple as a canonical uppercase `#RRGGBB` string
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Normalize a hex string to its canonical uppercase `#RRGGBB` form
///
/// Returns `None` for malformed input.
pub fn normalize_hex(input: &str) -> Option<String> {
    parse_hex(input).map(rgb_to_hex)
}

/// Hue in degrees `[0, 360)` from normalized channels and their spread
///
/// Shared by the HSL and HSV conversions: the branch is selected by which
/// channel is maximal, each adding its fixed sector offset, with +360
/// applied before the result would go negative.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let mut h = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    } * 60.0;

    if h < 0.0 {
        h += 360.0;
    }
    h
}

fn round_hue(h: f64) -> u16 {
    (h.round() as u16) % 360
}

fn round_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round() as u8
}

/// Convert RGB to HSL
///
/// Standard min/max-channel algorithm. Gray inputs (max == min) take the
/// achromatic branch: hue 0, saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl {
            h: 0,
            s: 0,
            l: round_percent(l),
        };
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = hue_degrees(r, g, b, max, delta);

    Hsl {
        h: round_hue(h),
        s: round_percent(s),
        l: round_percent(l),
    }
}

/// Convert HSL to RGB
///
/// Chroma/hue-sector inverse of [`rgb_to_hsl`]. Output channels are
/// clamped and rounded to `[0, 255]`.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = (hsl.h % 360) as f64;
    let s = hsl.s.min(100) as f64 / 100.0;
    let l = hsl.l.min(100) as f64 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgb {
        r: channel(r1),
        g: channel(g1),
        b: channel(b1),
    }
}

/// Convert RGB to HSV
///
/// Hue is computed with the same sector logic as [`rgb_to_hsl`];
/// value = max / 255, saturation = delta / max (0 for pure black).
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else {
        hue_degrees(r, g, b, max, delta)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: round_hue(h),
        s: round_percent(s),
        v: round_percent(max),
    }
}

/// Convert RGB to CMYK
///
/// k = 1 - max/255; c, m, y = (1 - channel/255 - k) / (1 - k). Pure black
/// takes an explicit branch (c = m = y = 0, k = 100) to avoid dividing
/// by zero.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let k = 1.0 - r.max(g).max(b);

    if k >= 1.0 {
        return Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 100,
        };
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    Cmyk {
        c: round_percent(c),
        m: round_percent(m),
        y: round_percent(y),
        k: round_percent(k),
    }
}
