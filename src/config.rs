//! Configuration for the palette generator
//!
//! Tunable parameters for palette generation, serializable to JSON so
//! applications can ship presets:
//!
//! ```no_run
//! use colorkit::GeneratorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = GeneratorConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = GeneratorConfig::default_vibrant();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::generation;
use crate::error::{ColorError, Result};
use crate::generator::Harmony;

/// Palette generation parameters
///
/// All percentages are integers in `[0, 100]`. The saturation and lightness
/// bands bound the random base draw; `lightness_spread` is the total
/// tint/shade variation across one palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Hue stepping scheme
    #[serde(default)]
    pub harmony: Harmony,

    /// Minimum base saturation, percent
    pub saturation_min: u8,

    /// Maximum base saturation, percent
    pub saturation_max: u8,

    /// Minimum base lightness, percent
    pub lightness_min: u8,

    /// Maximum base lightness, percent
    pub lightness_max: u8,

    /// Total lightness variation across a palette, percent
    pub lightness_spread: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::default_vibrant()
    }
}

impl GeneratorConfig {
    /// Default configuration: mid-to-high saturation and lightness bands
    /// with even hue spacing
    pub fn default_vibrant() -> Self {
        Self {
            harmony: Harmony::EvenlySpaced,
            saturation_min: generation::SATURATION_MIN,
            saturation_max: generation::SATURATION_MAX,
            lightness_min: generation::LIGHTNESS_MIN,
            lightness_max: generation::LIGHTNESS_MAX,
            lightness_spread: generation::LIGHTNESS_SPREAD,
        }
    }

    /// Check that all bands are within `[0, 100]` and not inverted
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.saturation_min > self.saturation_max {
            return Err(ColorError::config("saturation_min exceeds saturation_max"));
        }
        if self.lightness_min > self.lightness_max {
            return Err(ColorError::config("lightness_min exceeds lightness_max"));
        }
        if self.saturation_max > 100 {
            return Err(ColorError::config("saturation_max exceeds 100"));
        }
        if self.lightness_max > 100 {
            return Err(ColorError::config("lightness_max exceeds 100"));
        }
        if self.lightness_spread > 100 {
            return Err(ColorError::config("lightness_spread exceeds 100"));
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
