mod splitter;
mod windows;


pub use splitter::{chunk_text, Chunk, ChunkMetadata, ChunkerError};

/// Default context window, in tokens, for a single chunk
pub const DEFAULT_MAX_TOKENS: usize = 512;
