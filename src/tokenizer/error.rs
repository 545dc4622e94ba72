use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Failed to load tokenizer from '{path}': {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    #[error("Failed to configure tokenizer: {0}")]
    ConfigureFailed(String),

    #[error("Encoding failed: {0}")]
    EncodeFailed(String),

    #[error("Decoding failed: {0}")]
    DecodeFailed(String),
}
