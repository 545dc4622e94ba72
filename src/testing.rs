//! Test doubles for the tokenizer and summarizer seams

use crate::summarizer::{Summarizer, SummarizerError, SummaryCandidate, SummaryParams};
use crate::tokenizer::{TextTokenizer, TokenizerError};
use std::cell::RefCell;

const BOS: u32 = 0;
const EOS: u32 = 1;

/// Whitespace tokenizer: one token per word, ids assigned on first sight
pub struct WordTokenizer {
    vocab: RefCell<Vec<String>>,
    markers: bool,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            vocab: RefCell::new(vec!["<s>".into(), "</s>".into()]),
            markers: false,
        }
    }

    /// Wrap every encoding in `<s>` ... `</s>` like BART does
    pub fn with_markers() -> Self {
        Self {
            markers: true,
            ..Self::new()
        }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTokenizer for WordTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>, TokenizerError> {
        let mut vocab = self.vocab.borrow_mut();
        let mut ids = Vec::new();
        if self.markers {
            ids.push(BOS);
        }
        for word in text.split_whitespace() {
            let id = match vocab.iter().position(|w| w == word) {
                Some(pos) => pos,
                None => {
                    vocab.push(word.to_string());
                    vocab.len() - 1
                }
            };
            ids.push(id as u32);
        }
        if self.markers {
            ids.push(EOS);
        }
        Ok(ids)
    }

    fn decode(&self, ids: &[u32]) -> Result<String, TokenizerError> {
        let vocab = self.vocab.borrow();
        let mut words = Vec::with_capacity(ids.len());
        for &id in ids {
            if id == BOS || id == EOS {
                continue;
            }
            let word = vocab
                .get(id as usize)
                .ok_or_else(|| TokenizerError::DecodeFailed(format!("unknown id {}", id)))?;
            words.push(word.as_str());
        }
        Ok(words.join(" "))
    }
}

/// Tokenizer that always fails
pub struct BrokenTokenizer;

impl TextTokenizer for BrokenTokenizer {
    fn encode(&self, _text: &str) -> Result<Vec<u32>, TokenizerError> {
        Err(TokenizerError::EncodeFailed("vocabulary not loaded".into()))
    }

    fn decode(&self, _ids: &[u32]) -> Result<String, TokenizerError> {
        Err(TokenizerError::DecodeFailed("vocabulary not loaded".into()))
    }
}

/// Summarizer driven by a closure, recording every request it sees
pub struct ScriptedSummarizer<F> {
    respond: F,
    pub calls: RefCell<Vec<(String, SummaryParams)>>,
}

impl<F> ScriptedSummarizer<F>
where
    F: Fn(usize, &str) -> Result<String, SummarizerError>,
{
    /// `respond` receives the 0-based call number and the chunk text
    pub fn new(respond: F) -> Self {
        Self {
            respond,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl<F> Summarizer for ScriptedSummarizer<F>
where
    F: Fn(usize, &str) -> Result<String, SummarizerError>,
{
    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        let call = self.call_count();
        self.calls.borrow_mut().push((text.to_string(), *params));
        let summary_text = (self.respond)(call, text)?;
        Ok(vec![SummaryCandidate { summary_text }])
    }
}

/// `count` distinct words, so every word is its own token
pub fn words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}
