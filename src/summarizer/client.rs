use super::{
    HealthResponse, SummarizeRequest, Summarizer, SummarizerError, SummaryCandidate,
    SummaryParams,
};
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Blocking HTTP client for a summarization server.
///
/// The server is not part of this crate. It must answer `POST /summarize` with
/// a [`SummarizeRequest`] body by returning a JSON array of [`SummaryCandidate`],
/// and `GET /health` with a [`HealthResponse`].
pub struct SummarizerClient {
    http: Client,
    endpoint: String,
    timeout: Duration,
}

impl SummarizerClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SummarizerError> {
        Self::with_timeout(endpoint, Duration::from_secs(180)) // 3 min for model inference
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check if the summarizer server is healthy
    pub fn health_check(&self) -> Result<HealthResponse, SummarizerError> {
        let response = self
            .http
            .get(format!("{}/health", self.endpoint))
            .send()
            .map_err(|e| self.classify(e))?;

        Ok(Self::ensure_success(response)?.json()?)
    }

    fn classify(&self, err: reqwest::Error) -> SummarizerError {
        if err.is_timeout() {
            SummarizerError::Timeout(self.timeout)
        } else {
            SummarizerError::RequestFailed(err)
        }
    }

    fn ensure_success(response: Response) -> Result<Response, SummarizerError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizerError::ServerError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl Summarizer for SummarizerClient {
    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        let req = SummarizeRequest::deterministic(text, params);
        debug!(endpoint = %self.endpoint, chars = req.text.len(), "sending summarize request");

        let response = self
            .http
            .post(format!("{}/summarize", self.endpoint))
            .json(&req)
            .send()
            .map_err(|e| self.classify(e))?;

        let candidates: Vec<SummaryCandidate> = Self::ensure_success(response)?
            .json()
            .map_err(|e| self.classify(e))?;
        Ok(candidates)
    }
}
