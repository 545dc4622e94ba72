// Public API exports
pub mod aggregator;
pub mod chunker;
pub mod config;
pub mod pipeline;
pub mod summarizer;
pub mod tokenizer;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use aggregator::{
    fold_outcomes, AggregateSummary, Aggregator, ChunkOutcome, ChunkReport, FALLBACK_SUMMARY,
};
pub use chunker::{chunk_text, Chunk, ChunkMetadata, ChunkerError, DEFAULT_MAX_TOKENS};
pub use config::{ConfigError, SummaryConfig};
pub use pipeline::{run, Collaborators, PipelineError, RunReport};
pub use summarizer::{
    PythonSummarizer, SummarizeRequest, Summarizer, SummarizerClient, SummarizerError,
    SummaryCandidate, SummaryParams,
};
pub use tokenizer::{HfTokenizer, TextTokenizer, TokenizerError};
