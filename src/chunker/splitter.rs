use super::windows::{window_count, TokenWindows};
use crate::tokenizer::{TextTokenizer, TokenizerError};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ChunkerError {
    #[error("max_tokens must be greater than zero")]
    ZeroWindow,

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
}

/// A model-sized piece of the document, decoded back to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Decoded text with special tokens stripped
    pub text: String,
    /// Where this chunk sits in the token sequence
    pub metadata: ChunkMetadata,
}

/// Metadata for a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkMetadata {
    /// 0-based position among all chunks
    pub index: usize,
    /// First token of the window (inclusive)
    pub start_token: usize,
    /// End of the window (exclusive)
    pub end_token: usize,
}

impl ChunkMetadata {
    /// Number of tokens in the original window
    pub fn window_len(&self) -> usize {
        self.end_token - self.start_token
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Split a document into token windows of at most `max_tokens` and decode each one.
///
/// The whole document is tokenized without truncation, then partitioned into
/// consecutive windows. Decoding drops special tokens, so a chunk's text is not
/// guaranteed to byte-match the corresponding slice of the document.
///
/// An empty document yields no chunks.
pub fn chunk_text(
    document: &str,
    tokenizer: &dyn TextTokenizer,
    max_tokens: usize,
) -> Result<Vec<Chunk>, ChunkerError> {
    if max_tokens == 0 {
        return Err(ChunkerError::ZeroWindow);
    }
    if document.is_empty() {
        return Ok(vec![]);
    }

    let ids = tokenizer.encode(document)?;
    debug!(tokens = ids.len(), max_tokens, "tokenized document");

    let mut chunks = Vec::with_capacity(window_count(ids.len(), max_tokens));
    let mut start_token = 0;

    for (index, window) in TokenWindows::new(max_tokens).split(&ids).into_iter().enumerate() {
        let text = tokenizer.decode(window)?;
        let end_token = start_token + window.len();

        chunks.push(Chunk {
            text,
            metadata: ChunkMetadata {
                index,
                start_token,
                end_token,
            },
        });
        start_token = end_token;
    }

    Ok(chunks)
}
