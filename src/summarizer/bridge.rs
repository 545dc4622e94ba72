use super::{
    BatchItemResult, SummarizeRequest, Summarizer, SummarizerError, SummaryCandidate,
    SummaryParams,
};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Runs a Python summarization script that loads the model once per batch.
///
/// The script is invoked as `<python> <script> --model <model>`, receives a JSON
/// array of [`SummarizeRequest`] on stdin and must print a JSON array of
/// [`BatchItemResult`] on stdout, one entry per request and in the same order.
pub struct PythonSummarizer {
    python_path: PathBuf,
    script_path: PathBuf,
    model_name: String,
}

impl PythonSummarizer {
    pub fn new(
        python_path: impl Into<PathBuf>,
        script_path: impl Into<PathBuf>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            python_path: python_path.into(),
            script_path: script_path.into(),
            model_name: model_name.into(),
        }
    }

    fn invoke(&self, requests: &[SummarizeRequest]) -> Result<Vec<BatchItemResult>> {
        debug!(
            model = %self.model_name,
            requests = requests.len(),
            "starting summarizer script"
        );

        let input_json = serde_json::to_string(requests)
            .context("Failed to serialize summarize requests to JSON")?;

        let mut child = Command::new(&self.python_path)
            .arg(&self.script_path)
            .arg("--model")
            .arg(&self.model_name)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| {
                format!(
                    "Failed to spawn '{}' for summarization",
                    self.python_path.display()
                )
            })?;

        // Write input to stdin, then drop it so the script sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input_json.as_bytes())
                .context("Failed to write to summarizer stdin")?;
        }

        let output = child
            .wait_with_output()
            .context("Failed to wait for summarizer process")?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            bail!(
                "Summarizer script failed with exit code {:?}: {}",
                output.status.code(),
                stderr.trim()
            );
        }
        if !stderr.is_empty() {
            debug!(stderr = %stderr.trim(), "summarizer script output");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let results: Vec<BatchItemResult> = serde_json::from_str(&stdout).with_context(|| {
            format!("Failed to parse summarizer output as JSON. Output was:\n{}", stdout)
        })?;

        if results.len() != requests.len() {
            bail!(
                "Summarizer returned {} results for {} requests",
                results.len(),
                requests.len()
            );
        }

        Ok(results)
    }
}

impl Summarizer for PythonSummarizer {
    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        let req = SummarizeRequest::deterministic(text, params);
        let item = self
            .invoke(std::slice::from_ref(&req))?
            .into_iter()
            .next()
            .ok_or(SummarizerError::EmptyResponse)?;

        match item.error {
            Some(error) => Err(SummarizerError::ItemFailed(error)),
            None => Ok(item.candidates),
        }
    }

    fn summarize_batch(
        &self,
        texts: &[&str],
        params: &SummaryParams,
    ) -> Vec<Result<String, SummarizerError>> {
        if texts.is_empty() {
            return vec![];
        }

        let requests: Vec<SummarizeRequest> = texts
            .iter()
            .map(|text| SummarizeRequest::deterministic(*text, params))
            .collect();

        match self.invoke(&requests) {
            Ok(results) => results
                .into_iter()
                .map(|item| match item.error {
                    Some(error) => Err(SummarizerError::ItemFailed(error)),
                    None => item
                        .candidates
                        .into_iter()
                        .next()
                        .map(|candidate| candidate.summary_text)
                        .ok_or(SummarizerError::EmptyResponse),
                })
                .collect(),
            Err(err) => {
                // The whole batch is lost; every text reports the same cause
                let reason = format!("{:#}", err);
                warn!("Summarizer batch of {} failed: {}", texts.len(), reason);
                texts
                    .iter()
                    .map(|_| Err(SummarizerError::BatchFailed(reason.clone())))
                    .collect()
            }
        }
    }
}
