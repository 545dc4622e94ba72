mod bridge;
mod client;
mod error;
mod types;


pub use bridge::PythonSummarizer;
pub use client::SummarizerClient;
pub use error::SummarizerError;
pub use types::{
    BatchItemResult, HealthResponse, SummarizeRequest, SummaryCandidate, SummaryParams,
};

/// An external abstractive summarization capability.
///
/// Implementations must decode deterministically (no sampling) so repeated runs
/// over the same text and model produce the same candidates.
pub trait Summarizer {
    /// Summarize `text`, returning ranked candidates (best first)
    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError>;

    /// Summarize `text` and keep only the top-ranked candidate's text
    fn summarize_best(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<String, SummarizerError> {
        self.summarize(text, params)?
            .into_iter()
            .next()
            .map(|candidate| candidate.summary_text)
            .ok_or(SummarizerError::EmptyResponse)
    }

    /// Summarize several texts in order, one result per text.
    ///
    /// Backends that pay a setup cost per call (loading a model) override this
    /// to serve the whole batch at once. A failure for one text never affects
    /// the results for the others.
    fn summarize_batch(
        &self,
        texts: &[&str],
        params: &SummaryParams,
    ) -> Vec<Result<String, SummarizerError>> {
        texts
            .iter()
            .map(|text| self.summarize_best(text, params))
            .collect()
    }
}

impl<S: Summarizer + ?Sized> Summarizer for &S {
    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        (**self).summarize(text, params)
    }

    fn summarize_batch(
        &self,
        texts: &[&str],
        params: &SummaryParams,
    ) -> Vec<Result<String, SummarizerError>> {
        (**self).summarize_batch(texts, params)
    }
}

impl<S: Summarizer + ?Sized> Summarizer for Box<S> {
    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        (**self).summarize(text, params)
    }

    fn summarize_batch(
        &self,
        texts: &[&str],
        params: &SummaryParams,
    ) -> Vec<Result<String, SummarizerError>> {
        (**self).summarize_batch(texts, params)
    }
}
