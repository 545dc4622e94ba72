use super::{TextTokenizer, TokenizerError};
use std::path::Path;
use std::str::FromStr;
use tokenizers::Tokenizer;

/// Hugging Face `tokenizer.json` backend
pub struct HfTokenizer {
    inner: Tokenizer,
    /// Whether encode adds the model's BOS/EOS markers
    add_special_tokens: bool,
}

impl HfTokenizer {
    /// Load a tokenizer from a `tokenizer.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TokenizerError> {
        let path = path.as_ref();
        let inner = Tokenizer::from_file(path).map_err(|e| TokenizerError::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_tokenizer(inner)
    }

    /// Parse a tokenizer from its serialized JSON form
    pub fn from_json(json: &str) -> Result<Self, TokenizerError> {
        let inner = Tokenizer::from_str(json).map_err(|e| TokenizerError::LoadFailed {
            path: "<inline>".into(),
            reason: e.to_string(),
        })?;
        Self::from_tokenizer(inner)
    }

    /// Wrap an already-built tokenizer, switching truncation and padding off
    pub fn from_tokenizer(mut inner: Tokenizer) -> Result<Self, TokenizerError> {
        inner
            .with_truncation(None)
            .map_err(|e| TokenizerError::ConfigureFailed(e.to_string()))?;
        inner.with_padding(None);

        Ok(Self {
            inner,
            add_special_tokens: true,
        })
    }

    /// Toggle BOS/EOS insertion on encode (on by default)
    pub fn add_special_tokens(mut self, enabled: bool) -> Self {
        self.add_special_tokens = enabled;
        self
    }
}

impl TextTokenizer for HfTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>, TokenizerError> {
        let encoding = self
            .inner
            .encode(text, self.add_special_tokens)
            .map_err(|e| TokenizerError::EncodeFailed(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode(&self, ids: &[u32]) -> Result<String, TokenizerError> {
        self.inner
            .decode(ids, true)
            .map_err(|e| TokenizerError::DecodeFailed(e.to_string()))
    }
}
