mod error;
mod hf;


pub use error::TokenizerError;
pub use hf::HfTokenizer;

/// Core trait for anything that can turn text into token ids and back
pub trait TextTokenizer {
    /// Tokenize `text` in full. Implementations must never truncate.
    fn encode(&self, text: &str) -> Result<Vec<u32>, TokenizerError>;

    /// Decode token ids back into text, stripping special/control tokens
    fn decode(&self, ids: &[u32]) -> Result<String, TokenizerError>;

    /// Number of tokens `text` encodes to
    fn count_tokens(&self, text: &str) -> Result<usize, TokenizerError> {
        Ok(self.encode(text)?.len())
    }
}

impl<T: TextTokenizer + ?Sized> TextTokenizer for &T {
    fn encode(&self, text: &str) -> Result<Vec<u32>, TokenizerError> {
        (**self).encode(text)
    }

    fn decode(&self, ids: &[u32]) -> Result<String, TokenizerError> {
        (**self).decode(ids)
    }
}
