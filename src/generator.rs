//! Palette generation and theme classification
//!
//! Generates ordered sequences of harmonious hex colors from a randomized
//! base hue. The random draws pick only the base HSL values; the expansion
//! from base to palette is deterministic, so seeded tests reproduce entire
//! palettes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::conversion::{hsl_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl};
use crate::color::model::Hsl;
use crate::config::GeneratorConfig;
use crate::constants::{classification, generation};
use crate::error::{ColorError, Result};

/// Hue stepping scheme used when expanding a base hue into a palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Harmony {
    /// Distribute hues evenly across the full wheel (360° / count)
    #[default]
    EvenlySpaced,
    /// Neighboring hues, 30° apart
    Analogous,
    /// Opposite hues, alternating across the wheel
    Complementary,
    /// Hues 120° apart
    Triadic,
}

impl Harmony {
    /// Fixed hue increment per palette step, in degrees
    fn hue_step(self, count: usize) -> f64 {
        match self {
            Harmony::EvenlySpaced => 360.0 / count as f64,
            Harmony::Analogous => 30.0,
            Harmony::Complementary => 180.0,
            Harmony::Triadic => 120.0,
        }
    }
}

/// An ordered, fixed-length sequence of hex colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// The palette's colors as uppercase `#RRGGBB` strings, in order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.colors.iter()
    }

    /// The comma-separated string the UI places on the clipboard
    pub fn to_copy_string(&self) -> String {
        self.colors.join(", ")
    }

    /// Render the palette as a CSS custom-properties block
    ///
    /// ```text
    /// :root {
    ///   --color-1: #AABBCC;
    ///   --color-2: #DDEEFF;
    /// }
    /// ```
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (index, color) in self.colors.iter().enumerate() {
            css.push_str(&format!("  --color-{}: {};\n", index + 1, color));
        }
        css.push('}');
        css
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Palette generator with configurable value bands and harmony scheme
///
/// Saturation and lightness stay within mid-to-high bands so generated
/// palettes avoid muddy or oversaturated results. Lightness varies per
/// step as a tint/shade progression.
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    harmony: Harmony,
    saturation_range: (u8, u8),
    lightness_range: (u8, u8),
    lightness_spread: u8,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator {
    /// Create a generator with the default value bands and even hue spacing
    pub fn new() -> Self {
        Self {
            harmony: Harmony::default(),
            saturation_range: (generation::SATURATION_MIN, generation::SATURATION_MAX),
            lightness_range: (generation::LIGHTNESS_MIN, generation::LIGHTNESS_MAX),
            lightness_spread: generation::LIGHTNESS_SPREAD,
        }
    }

    /// Create a generator with a specific harmony scheme
    pub fn with_harmony(harmony: Harmony) -> Self {
        Self {
            harmony,
            ..Self::new()
        }
    }

    /// Create a generator from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidConfig` when the configuration's bands
    /// are out of range or inverted.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            harmony: config.harmony,
            saturation_range: (config.saturation_min, config.saturation_max),
            lightness_range: (config.lightness_min, config.lightness_max),
            lightness_spread: config.lightness_spread,
        })
    }

    /// Generate a palette of `count` colors from the process-wide random
    /// source
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidPaletteSize` when `count` is 0 or
    /// exceeds [`generation::MAX_PALETTE_COLORS`].
    pub fn generate(&self, count: usize) -> Result<Palette> {
        self.generate_with(&mut rand::thread_rng(), count)
    }

    /// Generate a palette of `count` colors from the given random source
    ///
    /// Only the base hue, saturation, and lightness are drawn from `rng`;
    /// the expansion into `count` colors is deterministic.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Palette> {
        if count == 0 || count > generation::MAX_PALETTE_COLORS {
            return Err(ColorError::InvalidPaletteSize {
                requested: count,
                max: generation::MAX_PALETTE_COLORS,
            });
        }

        let base_hue = rng.gen_range(0.0..360.0);
        let saturation = rng.gen_range(self.saturation_range.0..=self.saturation_range.1);
        let lightness = rng.gen_range(self.lightness_range.0..=self.lightness_range.1);

        Ok(self.expand(base_hue, saturation, lightness, count))
    }

    /// Deterministic expansion of a base HSL into an ordered palette
    fn expand(&self, base_hue: f64, saturation: u8, lightness: u8, count: usize) -> Palette {
        let step = self.harmony.hue_step(count);
        let mut colors = Vec::with_capacity(count);

        for index in 0..count {
            let hue = (base_hue + step * index as f64).rem_euclid(360.0);

            // tint/shade progression centered on the base lightness
            let offset = if count > 1 {
                (index as f64 / (count - 1) as f64 - 0.5) * self.lightness_spread as f64
            } else {
                0.0
            };
            let light = (lightness as f64 + offset).clamp(
                generation::LIGHTNESS_FLOOR as f64,
                generation::LIGHTNESS_CEILING as f64,
            );

            let hsl = Hsl::new(hue.round() as u16, saturation, light.round() as u8);
            colors.push(rgb_to_hex(hsl_to_rgb(hsl)));
        }

        Palette { colors }
    }
}

/// Classify a palette into one of seven named theme buckets
///
/// Computes the mean hue across the palette's colors (each parsed back to
/// RGB then HSL) and maps the mean into the fixed hue bands. Unparsable
/// members contribute hue 0; an empty palette classifies as the first
/// bucket.
pub fn classify_palette_theme(palette: &Palette) -> &'static str {
    let mean_hue = if palette.is_empty() {
        0.0
    } else {
        let sum: f64 = palette
            .iter()
            .map(|hex| {
                parse_hex(hex).map_or(0.0, |rgb| rgb_to_hsl(rgb).h as f64)
            })
            .sum();
        sum / palette.len() as f64
    };

    for (bound, label) in classification::HUE_BUCKETS
        .iter()
        .zip(classification::THEME_LABELS)
    {
        if mean_hue < *bound {
            return label;
        }
    }
    classification::THEME_LABELS[classification::THEME_LABELS.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn palette_of(hexes: &[&str]) -> Palette {
        Palette {
            colors: hexes.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_generate_shape() {
        let generator = PaletteGenerator::new();
        let palette = generator.generate(5).unwrap();

        assert_eq!(palette.len(), 5);
        for hex in &palette {
            assert!(parse_hex(hex).is_some(), "invalid member: {hex}");
            assert_eq!(hex, &hex.to_uppercase());
        }
    }

    #[test]
    fn test_generate_rejects_bad_counts() {
        let generator = PaletteGenerator::new();

        assert_eq!(
            generator.generate(0),
            Err(ColorError::InvalidPaletteSize {
                requested: 0,
                max: generation::MAX_PALETTE_COLORS
            })
        );
        assert!(generator.generate(13).is_err());
        assert!(generator.generate(1).is_ok());
        assert!(generator.generate(12).is_ok());
    }

    #[test]
    fn test_generate_seeded_is_deterministic() {
        let generator = PaletteGenerator::new();
        let a = generator
            .generate_with(&mut StdRng::seed_from_u64(42), 6)
            .unwrap();
        let b = generator
            .generate_with(&mut StdRng::seed_from_u64(42), 6)
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_evenly_spaced_hues_are_distinct() {
        let generator = PaletteGenerator::new();

        for seed in 0..16 {
            let palette = generator
                .generate_with(&mut StdRng::seed_from_u64(seed), 6)
                .unwrap();
            let mut hues: Vec<u16> = palette
                .iter()
                .map(|hex| rgb_to_hsl(parse_hex(hex).unwrap()).h)
                .collect();
            hues.sort_unstable();
            hues.dedup();

            assert_eq!(hues.len(), 6, "duplicate hues in {:?}", palette);
        }
    }

    #[test]
    fn test_generated_lightness_stays_in_bounds() {
        let generator = PaletteGenerator::new();

        for seed in 0..16 {
            let palette = generator
                .generate_with(&mut StdRng::seed_from_u64(seed), 12)
                .unwrap();
            for hex in &palette {
                let hsl = rgb_to_hsl(parse_hex(hex).unwrap());
                // ±1 slack for the HSL -> RGB -> HSL rounding
                assert!(hsl.l + 1 >= generation::LIGHTNESS_FLOOR, "{hex} too dark");
                assert!(hsl.l <= generation::LIGHTNESS_CEILING + 1, "{hex} too light");
            }
        }
    }

    #[test]
    fn test_single_color_palette() {
        let generator = PaletteGenerator::new();
        let palette = generator
            .generate_with(&mut StdRng::seed_from_u64(1), 1)
            .unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_harmony_steps() {
        assert_eq!(Harmony::EvenlySpaced.hue_step(6), 60.0);
        assert_eq!(Harmony::Analogous.hue_step(6), 30.0);
        assert_eq!(Harmony::Complementary.hue_step(6), 180.0);
        assert_eq!(Harmony::Triadic.hue_step(6), 120.0);
    }

    #[test]
    fn test_classify_known_buckets() {
        assert_eq!(classify_palette_theme(&palette_of(&["#FF0000"])), "Warm Reds");
        assert_eq!(
            classify_palette_theme(&palette_of(&["#FFFF00"])),
            "Sunny Yellows"
        );
        assert_eq!(
            classify_palette_theme(&palette_of(&["#00FF00"])),
            "Fresh Greens"
        );
        assert_eq!(
            classify_palette_theme(&palette_of(&["#00FFFF"])),
            "Cool Cyans"
        );
        assert_eq!(classify_palette_theme(&palette_of(&["#0000FF"])), "Rich Purples");
        assert_eq!(
            classify_palette_theme(&palette_of(&["#FF00FF"])),
            "Vibrant Magentas"
        );
    }

    #[test]
    fn test_classify_uses_mean_hue() {
        // red (0°) and green (120°) average to 60°, the green band edge
        let palette = palette_of(&["#FF0000", "#00FF00"]);
        assert_eq!(classify_palette_theme(&palette), "Fresh Greens");
    }

    #[test]
    fn test_classify_unparsable_members_count_as_zero() {
        let palette = palette_of(&["#00FF00", "garbage"]);
        // (120 + 0) / 2 = 60 -> green band
        assert_eq!(classify_palette_theme(&palette), "Fresh Greens");
    }

    #[test]
    fn test_classify_always_returns_known_label() {
        let generator = PaletteGenerator::new();
        for seed in 0..32 {
            let palette = generator
                .generate_with(&mut StdRng::seed_from_u64(seed), 5)
                .unwrap();
            let label = classify_palette_theme(&palette);
            assert!(classification::THEME_LABELS.contains(&label));
        }
    }

    #[test]
    fn test_css_variables_format() {
        let palette = palette_of(&["#AABBCC", "#DDEEFF"]);
        assert_eq!(
            palette.to_css_variables(),
            ":root {\n  --color-1: #AABBCC;\n  --color-2: #DDEEFF;\n}"
        );
    }

    #[test]
    fn test_copy_string_format() {
        let palette = palette_of(&["#AABBCC", "#DDEEFF"]);
        assert_eq!(palette.to_copy_string(), "#AABBCC, #DDEEFF");
    }
}
