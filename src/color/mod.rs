//! Color model, conversion, and analysis module
//!
//! This module holds the color value types, the pure color space
//! conversion functions, and the derived operations (complementary,
//! random colors, accessibility metrics).

pub mod analysis;
pub mod conversion;
pub mod model;

pub use analysis::{
    complementary_color, contrast_ratio, generate_random_color, is_light_color, meets_aa,
    meets_aaa, random_color, relative_luminance,
};
pub use conversion::{
    hsl_to_rgb, normalize_hex, parse_hex, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
};
pub use model::{Cmyk, Hsl, Hsv, Rgb};
