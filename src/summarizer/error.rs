use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Summarizer process failed: {0:#}")]
    ProcessFailed(#[from] anyhow::Error),

    #[error("Summarizer returned no candidates")]
    EmptyResponse,

    #[error("Summarizer rejected this text: {0}")]
    ItemFailed(String),

    #[error("Summarizer batch failed: {0}")]
    BatchFailed(String),
}
