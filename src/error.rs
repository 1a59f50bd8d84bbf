//! Error types for Sizhu
//!
//! Uses `thiserror` for library errors.
//!
//! Only input-integrity and boundary failures live here. A well-formed
//! four-pillar selection that breaks a calendar rule is not an error; it is
//! reported as data through [`crate::validate::ValidationReport`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sizhu operations
pub type SizhuResult<T> = Result<T, SizhuError>;

/// Main error type for Sizhu operations
#[derive(Error, Debug)]
pub enum SizhuError {
    /// Stem index outside the fixed ten-entry table
    #[error("stem index {index} out of range (expected 0..10)")]
    InvalidStemIndex { index: usize },

    /// Branch index outside the fixed twelve-entry table
    #[error("branch index {index} out of range (expected 0..12)")]
    InvalidBranchIndex { index: usize },

    /// Symbol not found in the heavenly stem table
    #[error("'{symbol}' is not one of the ten heavenly stems")]
    InvalidStemSymbol { symbol: String },

    /// Symbol not found in the earthly branch table
    #[error("'{symbol}' is not one of the twelve earthly branches")]
    InvalidBranchSymbol { symbol: String },

    /// Symbol found in neither fixed table
    #[error("'{symbol}' is neither a heavenly stem nor an earthly branch")]
    InvalidSymbol { symbol: String },

    /// No frontmatter found (missing `---` delimiters)
    #[error("no frontmatter found - content must start with '---'")]
    NoFrontmatter,

    /// Frontmatter not properly closed
    #[error("unclosed frontmatter - missing closing '---'")]
    UnclosedFrontmatter,

    /// Invalid configuration file
    #[error("invalid config {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_stem_index() {
        let err = SizhuError::InvalidStemIndex { index: 10 };
        assert_eq!(
            err.to_string(),
            "stem index 10 out of range (expected 0..10)"
        );
    }

    #[test]
    fn test_error_display_invalid_symbol() {
        let err = SizhuError::InvalidSymbol {
            symbol: "鼠".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'鼠' is neither a heavenly stem nor an earthly branch"
        );
    }

    #[test]
    fn test_error_display_no_frontmatter() {
        let err = SizhuError::NoFrontmatter;
        assert_eq!(
            err.to_string(),
            "no frontmatter found - content must start with '---'"
        );
    }
}
