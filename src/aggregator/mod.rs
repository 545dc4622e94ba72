mod outcome;


pub use outcome::{fold_outcomes, ChunkOutcome, ChunkReport};

use crate::summarizer::{Summarizer, SummaryParams};
use crate::tokenizer::{TextTokenizer, TokenizerError};
use tracing::{info, warn};

/// Returned when no chunk produced a summary
pub const FALLBACK_SUMMARY: &str = "Summary could not be generated.";

/// Result of summarizing every chunk of a document
#[derive(Debug, Clone)]
pub struct AggregateSummary {
    /// Space-joined fragments, or [`FALLBACK_SUMMARY`]
    pub text: String,
    /// One report per chunk, in chunk order
    pub reports: Vec<ChunkReport>,
}

impl AggregateSummary {
    pub fn summarized_count(&self) -> usize {
        self.count(|o| matches!(o, ChunkOutcome::Summarized(_)))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, ChunkOutcome::Skipped))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, ChunkOutcome::Failed(_)))
    }

    /// True when the text is the fallback rather than real fragments
    pub fn is_fallback(&self) -> bool {
        self.summarized_count() == 0
    }

    fn count(&self, pred: impl Fn(&ChunkOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Summarizes chunks one at a time and joins the fragments.
///
/// Both collaborators are borrowed handles so callers (and tests) decide
/// which tokenizer and model back a run.
pub struct Aggregator<'a> {
    tokenizer: &'a dyn TextTokenizer,
    summarizer: &'a dyn Summarizer,
    params: SummaryParams,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        tokenizer: &'a dyn TextTokenizer,
        summarizer: &'a dyn Summarizer,
        params: SummaryParams,
    ) -> Self {
        Self {
            tokenizer,
            summarizer,
            params,
        }
    }

    /// Summarize every chunk in order.
    ///
    /// Every chunk is measured and filtered first; the survivors then go to the
    /// summarizer as one batch so a backend can load its model once. A
    /// summarizer failure only costs that chunk its fragment. A tokenizer
    /// failure while measuring a chunk aborts the run.
    pub fn summarize<T: AsRef<str>>(
        &self,
        chunks: &[T],
    ) -> Result<AggregateSummary, TokenizerError> {
        let total = chunks.len();
        info!("Total Chunks: {}", total);

        let mut token_counts = Vec::with_capacity(total);
        for (index, chunk) in chunks.iter().enumerate() {
            token_counts.push(self.measure(index, total, chunk.as_ref())?);
        }

        let texts: Vec<&str> = chunks
            .iter()
            .zip(&token_counts)
            .filter(|(_, count)| self.keeps(**count))
            .map(|(chunk, _)| chunk.as_ref())
            .collect();
        let mut results = self
            .summarizer
            .summarize_batch(&texts, &self.params)
            .into_iter();

        let reports: Vec<ChunkReport> = token_counts
            .into_iter()
            .enumerate()
            .map(|(index, token_count)| {
                let outcome = if !self.keeps(token_count) {
                    ChunkOutcome::Skipped
                } else {
                    match results.next() {
                        Some(Ok(fragment)) => ChunkOutcome::Summarized(fragment),
                        Some(Err(e)) => {
                            warn!("Error processing chunk {}: {}", index + 1, e);
                            ChunkOutcome::Failed(e.to_string())
                        }
                        None => {
                            warn!("Error processing chunk {}: no result returned", index + 1);
                            ChunkOutcome::Failed("no result returned".to_string())
                        }
                    }
                };
                ChunkReport {
                    index,
                    token_count,
                    outcome,
                }
            })
            .collect();

        let text = fold_outcomes(reports.iter().map(|r| &r.outcome));
        Ok(AggregateSummary { text, reports })
    }

    /// Chunks measuring fewer than `min_length` tokens are not worth summarizing
    fn keeps(&self, token_count: usize) -> bool {
        token_count >= self.params.min_length
    }

    /// Re-encode one chunk and report its token count
    fn measure(&self, index: usize, total: usize, text: &str) -> Result<usize, TokenizerError> {
        let number = index + 1;

        // Re-encode the decoded text; its count can differ from the window length
        let token_count = self.tokenizer.count_tokens(text)?;
        info!("Chunk {}/{} - Token Count: {}", number, total, token_count);

        if !self.keeps(token_count) {
            warn!("Skipping chunk {} due to low token count.", number);
        }
        Ok(token_count)
    }
}
