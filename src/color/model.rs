//! Color value types
//!
//! Immutable value representations for the four color spaces the library
//! converts between. All numeric components are stored as the rounded
//! integers the UI displays and copies; internal conversion math uses
//! floating point (see `conversion`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An RGB triple with 8-bit channels in `[0, 255]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string into an RGB triple
    ///
    /// Accepts an optional leading `#` followed by exactly 6 hexadecimal
    /// digits, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHexLength` for any other digit count and
    /// `ColorError::InvalidHexDigit` for non-hex characters. Callers that do
    /// not care about the reason can use [`crate::parse_hex`] instead, which
    /// collapses both cases into `None`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 {
            return Err(ColorError::InvalidHexLength {
                found: digits.len(),
            });
        }
        if let Some(position) = digits.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit { position });
        }

        // The digit check above guarantees ASCII, so byte slicing is safe.
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHexLength {
                found: digits.len(),
            })
        };

        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Format as a canonical uppercase `#RRGGBB` string
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A color in HSL space: hue in degrees `[0, 360)`, saturation and
/// lightness as integer percentages `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Create an HSL color, normalizing hue into `[0, 360)` and clamping
    /// saturation and lightness to 100
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Rotate the hue by the given number of degrees, wrapping at 360
    pub fn rotate(self, degrees: u16) -> Self {
        Self {
            h: (self.h + degrees % 360) % 360,
            ..self
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// A color in HSV space: hue in degrees `[0, 360)`, saturation and value
/// as integer percentages `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub fn new(h: u16, s: u8, v: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            v: v.min(100),
        }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

/// A color in CMYK space, each component an integer percentage `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    pub fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self {
            c: c.min(100),
            m: m.min(100),
            y: y.min(100),
            k: k.min(100),
        }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}
