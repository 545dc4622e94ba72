mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Backend, Cli};
use longsum::pipeline::Collaborators;
use longsum::{
    HfTokenizer, PipelineError, PythonSummarizer, Summarizer, SummarizerClient, SummaryConfig,
};
use std::process::ExitCode;
use std::time::{Duration, Instant};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PipelineError>() {
                Some(PipelineError::InputNotFound(_)) => eprintln!("Error: {}", err),
                _ => eprintln!("An error occurred: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let config = match &cli.config {
        Some(path) => SummaryConfig::from_json_file(path)
            .with_context(|| format!("loading config from '{}'", path.display()))?,
        None => SummaryConfig::new(cli.max_tokens, cli.max_length, cli.min_length),
    };

    let report = longsum::run(&cli.input, &cli.output, &config, || {
        Ok(Collaborators {
            tokenizer: Box::new(HfTokenizer::from_file(&cli.tokenizer)?),
            summarizer: build_summarizer(cli)?,
        })
    })?;

    println!("\nFinal Summary:\n {}", report.summary.text);
    println!("\nSummary saved to '{}'.", report.output.display());

    tracing::info!(
        chunks = report.chunk_count(),
        summarized = report.summary.summarized_count(),
        skipped = report.summary.skipped_count(),
        failed = report.summary.failed_count(),
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "done"
    );

    Ok(())
}

fn build_summarizer(cli: &Cli) -> Result<Box<dyn Summarizer>, PipelineError> {
    match cli.backend {
        Backend::Http => {
            let client = SummarizerClient::with_timeout(
                cli.endpoint.as_str(),
                Duration::from_secs(cli.timeout_secs),
            )?;
            if cli.check_health {
                let health = client.health_check()?;
                tracing::info!(status = %health.status, model = %health.model, "summarizer is up");
            }
            Ok(Box::new(client))
        }
        Backend::Python => Ok(Box::new(PythonSummarizer::new(
            &cli.python,
            &cli.script,
            cli.model.as_str(),
        ))),
    }
}
