//! Command-line interface for create-test-file
//!
//! Writes a JSONL fixture file for exercising the Beats Firehose and Kinesis
//! outputs with large or numerous records.
//!
//! # Usage Examples
//!
//! ```bash
//! # 1,000 lines of 500 KB each into /tmp/out/1k500kb
//! create-test-file --type 1k500kb --dir /tmp/out
//!
//! # 1,000,000 lines of 1 KB each, recording throughput
//! create-test-file --type 1m1kb --dir /tmp/out --emit-metrics /tmp/metrics.jsonl
//! ```
//!
//! ## Presets
//! - `1k800kb`: 1,000 lines x 800,000 filler bytes
//! - `1k500kb`: 1,000 lines x 500,000 filler bytes
//! - `1m1kb`: 1,000,000 lines x 1,000 filler bytes
//! - `10k100kb`: accepted but has no preset, so nothing is written

use anyhow::Context;
use clap::Parser;
use fixture_jsonl::{emit_metrics, generate, FixtureArgs, FixtureError, GenerateConfig};

#[derive(Parser)]
#[command(name = "create-test-file")]
#[command(about = "Create test file for the Beats Firehose and Kinesis outputs")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: FixtureArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GenerateConfig::try_from(cli.args)?;
    tracing::debug!("Configuration: {:?}", config);

    run_generate(&config)
}

fn run_generate(config: &GenerateConfig) -> anyhow::Result<()> {
    let metrics = match generate(&config.preset_name, &config.destination_dir) {
        Ok(metrics) => metrics,
        Err(FixtureError::UnknownPreset(name)) => {
            // Accepted by the CLI but missing from the preset table: not an error
            println!("doing nothing got {name}");
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "Failed to write '{}' fixture into {}",
                    config.preset_name,
                    config.destination_dir.display()
                )
            })
        }
    };

    if let Some(metrics_path) = &config.emit_metrics {
        emit_metrics(metrics_path, &config.preset_name, &metrics).with_context(|| {
            format!("Failed to write metrics to {}", metrics_path.display())
        })?;
    }

    Ok(())
}
