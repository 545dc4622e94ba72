use serde::{Deserialize, Serialize};

/// Length bounds forwarded to the model, in tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    pub max_length: usize,
    pub min_length: usize,
}

/// The wire contract shared by the HTTP and subprocess backends
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub max_length: usize,
    pub min_length: usize,
    pub do_sample: bool,
}

impl SummarizeRequest {
    /// Build a request with sampling switched off
    pub fn deterministic(text: impl Into<String>, params: &SummaryParams) -> Self {
        Self {
            text: text.into(),
            max_length: params.max_length,
            min_length: params.min_length,
            do_sample: false,
        }
    }
}

/// One ranked summary produced by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCandidate {
    pub summary_text: String,
}

/// One entry of a batch response: the candidates for a text, or why it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItemResult {
    #[serde(default)]
    pub candidates: Vec<SummaryCandidate>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}
