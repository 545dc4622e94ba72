//! Numeric knobs for chunking and summarization

use crate::chunker::DEFAULT_MAX_TOKENS;
use crate::summarizer::SummaryParams;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Upper bound on summary length, in tokens
pub const DEFAULT_MAX_LENGTH: usize = 150;

/// Lower bound on summary length; also the minimum chunk size worth summarizing
pub const DEFAULT_MIN_LENGTH: usize = 50;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("max_tokens must be greater than zero")]
    ZeroMaxTokens,

    #[error("max_length must be greater than zero")]
    ZeroMaxLength,

    #[error("min_length ({min}) exceeds max_length ({max})")]
    LengthBoundsInverted { min: usize, max: usize },

    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Summarization run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Token window per chunk
    pub max_tokens: usize,

    /// Longest summary the model may produce per chunk
    pub max_length: usize,

    /// Shortest summary per chunk. Chunks measuring fewer tokens are skipped.
    pub min_length: usize,
}

impl SummaryConfig {
    pub fn new(max_tokens: usize, max_length: usize, min_length: usize) -> Self {
        Self {
            max_tokens,
            max_length,
            min_length,
        }
    }

    /// Load from a JSON file; missing fields fall back to defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tokens == 0 {
            return Err(ConfigError::ZeroMaxTokens);
        }
        if self.max_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::LengthBoundsInverted {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    /// Length bounds handed to the summarizer
    pub fn params(&self) -> SummaryParams {
        SummaryParams {
            max_length: self.max_length,
            min_length: self.min_length,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = SummaryConfig::default();
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.max_length, 150);
        assert_eq!(config.min_length, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_window() {
        let config = SummaryConfig::new(0, 150, 50);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroMaxTokens)));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = SummaryConfig::new(512, 40, 50);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LengthBoundsInverted { min: 50, max: 40 })
        ));
    }

    #[test]
    fn test_params() {
        let params = SummaryConfig::new(256, 100, 20).params();
        assert_eq!(params.max_length, 100);
        assert_eq!(params.min_length, 20);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("longsum.json");
        fs::write(&path, r#"{"max_tokens": 1024}"#).unwrap();

        let config = SummaryConfig::from_json_file(&path).unwrap();
        assert_eq!(config, SummaryConfig::new(1024, 150, 50));
    }

    #[test]
    fn test_invalid_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("longsum.json");
        fs::write(&path, r#"{"max_tokens": 0}"#).unwrap();

        assert!(matches!(
            SummaryConfig::from_json_file(&path),
            Err(ConfigError::ZeroMaxTokens)
        ));
    }
}
