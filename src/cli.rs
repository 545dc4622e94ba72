use clap::{Parser, ValueEnum};
use longsum::config::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use longsum::DEFAULT_MAX_TOKENS;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "longsum")]
#[command(about = "Summarize a long text file chunk by chunk", long_about = None)]
pub struct Cli {
    /// Text file to summarize
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Where the final summary is written
    #[arg(short, long, default_value = "summary_output.txt")]
    pub output: PathBuf,

    /// Hugging Face tokenizer.json matching the summarization model
    #[arg(long, default_value = "tokenizer.json")]
    pub tokenizer: PathBuf,

    /// How to reach the summarization model
    #[arg(long, value_enum, default_value_t = Backend::Python)]
    pub backend: Backend,

    /// Summarization server base URL (http backend)
    #[arg(long, default_value = "http://localhost:18116")]
    pub endpoint: String,

    /// Per-request timeout in seconds (http backend)
    #[arg(long, default_value_t = 180)]
    pub timeout_secs: u64,

    /// Query the server's /health route before summarizing (http backend)
    #[arg(long)]
    pub check_health: bool,

    /// Python interpreter (python backend)
    #[arg(long, default_value = "python3")]
    pub python: PathBuf,

    /// Summarization script (python backend)
    #[arg(long, default_value = "python/summarize.py")]
    pub script: PathBuf,

    /// Model name passed to the script (python backend)
    #[arg(long, default_value = "facebook/bart-large-cnn")]
    pub model: String,

    /// JSON file with max_tokens/max_length/min_length; overrides the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tokens per chunk
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: usize,

    /// Longest summary per chunk, in tokens
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Shortest summary per chunk; shorter chunks are skipped
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// An external server answering `POST /summarize` with
    /// `{"text", "max_length", "min_length", "do_sample"}` -> `[{"summary_text"}]`
    Http,
    /// python/summarize.py, one process per run
    Python,
}
