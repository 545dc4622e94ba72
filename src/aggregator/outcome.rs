use super::FALLBACK_SUMMARY;

/// What happened to one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// The model produced this fragment
    Summarized(String),
    /// Below the minimum token count; never sent to the model
    Skipped,
    /// The summarizer failed; holds the error message
    Failed(String),
}

impl ChunkOutcome {
    pub fn fragment(&self) -> Option<&str> {
        match self {
            ChunkOutcome::Summarized(text) => Some(text),
            _ => None,
        }
    }
}

/// Per-chunk record kept for progress reporting and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    /// 0-based chunk position
    pub index: usize,
    /// Token count measured by re-encoding the chunk text
    pub token_count: usize,
    pub outcome: ChunkOutcome,
}

/// Join fragments with single spaces in the order given, ignoring skipped and
/// failed chunks. Falls back to [`FALLBACK_SUMMARY`] when nothing survives.
pub fn fold_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a ChunkOutcome>) -> String {
    let fragments: Vec<&str> = outcomes.into_iter().filter_map(ChunkOutcome::fragment).collect();

    if fragments.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        fragments.join(" ")
    }
}
