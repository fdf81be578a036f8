use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdp_extract::adapters::jsonl::sink::JsonlFileSink;
use pdp_extract::adapters::jsonl::source::JsonlDirectorySource;
use pdp_extract::adapters::tracing_log::TracingLog;
use pdp_extract::batch::run_batch;
use pdp_extract::config::load_config;
use pdp_extract::domain::extract::ListingExtractor;

#[derive(Parser)]
#[command(name = "pdp-extract")]
#[command(
    version,
    about = "Extract house rules, amenities and descriptions from listing page payloads",
    long_about = None
)]
struct Cli {
    /// YAML config file; defaults apply when it does not exist
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Directory of downloaded `<listing_id>.jsonl` payloads
    #[arg(long)]
    data_path: Option<PathBuf>,

    /// JSONL file the records are appended to
    #[arg(long)]
    output_path: Option<PathBuf>,

    /// Number of listings processed at once
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(data_path) = cli.data_path {
        config.input.data_dir = data_path;
    }
    if let Some(output_path) = cli.output_path {
        config.output.path = output_path;
    }
    if let Some(concurrency) = cli.concurrency {
        config.batch.concurrency = concurrency;
    }

    // Logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        data_dir = %config.input.data_dir.display(),
        output = %config.output.path.display(),
        "Starting pdp-extract"
    );

    let source = Arc::new(JsonlDirectorySource::new(
        config.input.data_dir.clone(),
        config.input.extension.clone(),
    ));
    let mut sink = JsonlFileSink::open(&config.output.path, config.output.append)
        .await
        .with_context(|| format!("opening output {}", config.output.path.display()))?;
    let extractor = ListingExtractor::new(Arc::new(TracingLog));

    let report = run_batch(source, &mut sink, extractor, config.batch.concurrency).await?;
    tracing::info!(
        output = %sink.path().display(),
        report = %serde_json::to_string(&report)?,
        "Done"
    );

    Ok(())
}
