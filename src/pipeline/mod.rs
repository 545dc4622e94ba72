//! File-to-file orchestration: read, chunk, summarize, write

use crate::aggregator::{AggregateSummary, Aggregator};
use crate::chunker::{chunk_text, ChunkerError};
use crate::config::{ConfigError, SummaryConfig};
use crate::summarizer::{Summarizer, SummarizerError};
use crate::tokenizer::{TextTokenizer, TokenizerError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;


#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File '{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read '{}': {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("Failed to write '{}': {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Summarizer setup failed: {0}")]
    Summarizer(#[from] SummarizerError),
}

impl From<ChunkerError> for PipelineError {
    fn from(err: ChunkerError) -> Self {
        match err {
            ChunkerError::ZeroWindow => PipelineError::Config(ConfigError::ZeroMaxTokens),
            ChunkerError::Tokenizer(e) => PipelineError::Tokenizer(e),
        }
    }
}

/// The tokenizer and model a run talks to
pub struct Collaborators<'a> {
    pub tokenizer: Box<dyn TextTokenizer + 'a>,
    pub summarizer: Box<dyn Summarizer + 'a>,
}

impl<'a> Collaborators<'a> {
    pub fn new(tokenizer: impl TextTokenizer + 'a, summarizer: impl Summarizer + 'a) -> Self {
        Self {
            tokenizer: Box::new(tokenizer),
            summarizer: Box::new(summarizer),
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: AggregateSummary,
}

impl RunReport {
    pub fn chunk_count(&self) -> usize {
        self.summary.reports.len()
    }
}

/// Read the whole input document as UTF-8
pub fn read_document(path: impl AsRef<Path>) -> Result<String, PipelineError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PipelineError::InputNotFound(path.to_path_buf()),
        _ => PipelineError::ReadInput {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Chunk a document and summarize every chunk
pub fn summarize_document(
    document: &str,
    tokenizer: &dyn TextTokenizer,
    summarizer: &dyn Summarizer,
    config: &SummaryConfig,
) -> Result<AggregateSummary, PipelineError> {
    config.validate()?;

    let chunks = chunk_text(document, tokenizer, config.max_tokens)?;
    let aggregator = Aggregator::new(tokenizer, summarizer, config.params());
    Ok(aggregator.summarize(&chunks)?)
}

/// Persist the final summary, replacing any previous file
pub fn write_summary(path: impl AsRef<Path>, summary: &str) -> Result<(), PipelineError> {
    let path = path.as_ref();
    fs::write(path, summary).map_err(|source| PipelineError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Summarize `input` into `output`.
///
/// The input is read before `connect` is called, so a missing file is reported
/// without loading a tokenizer or model and never leaves an output file behind.
/// Once every chunk has been processed the summary is written even if it is
/// only the fallback text.
pub fn run<'a, F>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &SummaryConfig,
    connect: F,
) -> Result<RunReport, PipelineError>
where
    F: FnOnce() -> Result<Collaborators<'a>, PipelineError>,
{
    let (input, output) = (input.as_ref(), output.as_ref());

    let document = read_document(input)?;
    info!(path = %input.display(), bytes = document.len(), "read input document");

    let Collaborators {
        tokenizer,
        summarizer,
    } = connect()?;

    let summary = summarize_document(&document, &*tokenizer, &*summarizer, config)?;
    write_summary(output, &summary.text)?;

    info!(
        path = %output.display(),
        summarized = summary.summarized_count(),
        skipped = summary.skipped_count(),
        failed = summary.failed_count(),
        "wrote summary"
    );

    Ok(RunReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        summary,
    })
}
