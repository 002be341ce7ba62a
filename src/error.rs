//! Error types for the colorkit library

use thiserror::Error;

/// Result type alias for colorkit operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color parsing and palette generation
///
/// The optional-style API (`parse_hex`, `contrast_ratio`, ...) signals
/// malformed input by returning `None`. This enum backs the fallible API
/// (`Rgb::from_hex`, `inspect`, `PaletteGenerator::generate`) where callers
/// want to know *why* an input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex string did not contain exactly 6 hex digits after the `#` prefix
    #[error("invalid hex color: expected 6 hex digits, got {found}")]
    InvalidHexLength { found: usize },

    /// A non-hexadecimal character was found in the hex string
    #[error("invalid hex color: non-hex character at byte {position}")]
    InvalidHexDigit { position: usize },

    /// Requested palette size outside the supported range
    #[error("invalid palette size: {requested} (expected 1..={max})")]
    InvalidPaletteSize { requested: usize, max: usize },

    /// Generator configuration failed validation
    #[error("invalid generator configuration: {message}")]
    InvalidConfig { message: String },
}

impl ColorError {
    /// Create a configuration error with context
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidHexLength { .. } | ColorError::InvalidHexDigit { .. } => {
                "Please enter a color as six hex digits, e.g. #3B82F6.".to_string()
            }
            ColorError::InvalidPaletteSize { max, .. } => {
                format!("Palettes can hold between 1 and {} colors.", max)
            }
            ColorError::InvalidConfig { .. } => {
                "The palette generator settings are out of range.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColorError::InvalidHexLength { found: 5 };
        assert_eq!(
            err.to_string(),
            "invalid hex color: expected 6 hex digits, got 5"
        );
    }

    #[test]
    fn test_user_messages_are_nonempty() {
        let errors = [
            ColorError::InvalidHexLength { found: 0 },
            ColorError::InvalidHexDigit { position: 3 },
            ColorError::InvalidPaletteSize {
                requested: 99,
                max: 12,
            },
            ColorError::config("saturation_min > saturation_max"),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
