//! Command-line interface for blurr
//!
//! # Usage Examples
//!
//! ## Run
//! ```bash
//! # In-memory dry run
//! blurr run --config workload.yaml
//!
//! # Override the config: 16 workers, 20k ops/sec, stop after 10 minutes
//! blurr run --config workload.yaml \
//!   --workers 16 --throughput 20000 --max-duration 10m
//!
//! # Machine-readable report
//! blurr run --config workload.yaml --json
//! ```
//!
//! ## Inspect
//! ```bash
//! blurr validate --config workload.yaml
//! blurr sample --config workload.yaml --index 42
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=blurr=info,workload_engine=debug`).

use anyhow::Context;
use blurr::config::duration::parse_interval;
use blurr::{run, FileConfig, WorkloadOverrides};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blurr")]
#[command(about = "Synthetic workload generator for document databases")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a workload and print the report
    Run {
        /// Config file (YAML, or TOML with a .toml extension)
        #[arg(long, value_name = "PATH", env = "BLURR_CONFIG")]
        config: PathBuf,

        #[command(flatten)]
        overrides: WorkloadOverrides,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Log progress at this interval (e.g. "10s")
        #[arg(long)]
        progress_interval: Option<String>,
    },

    /// Validate a config file and print one sample batch
    Validate {
        /// Config file (YAML, or TOML with a .toml extension)
        #[arg(long, value_name = "PATH", env = "BLURR_CONFIG")]
        config: PathBuf,
    },

    /// Print the key and document generated for a record index
    Sample {
        /// Config file (YAML, or TOML with a .toml extension)
        #[arg(long, value_name = "PATH", env = "BLURR_CONFIG")]
        config: PathBuf,

        /// Record index (records are numbered from 1)
        #[arg(long, default_value = "1")]
        index: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            overrides,
            json,
            progress_interval,
        } => {
            let mut file_config = FileConfig::from_file(&config)?;
            overrides.apply(&mut file_config.workload)?;
            let progress_interval = progress_interval
                .as_deref()
                .map(parse_interval)
                .transpose()
                .context("Invalid --progress-interval")?;

            let report = run::run_workload(file_config, progress_interval).await?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.format_table());
            }
        }
        Commands::Validate { config } => {
            let file_config = FileConfig::from_file(&config)?;
            file_config.validate()?;

            let batch = run::sample_batch(&file_config.workload)?;
            let tokens: Vec<&str> = batch.iter().map(|kind| kind.as_str()).collect();
            println!("Configuration is valid: {}", config.display());
            println!("Sample batch: {}", tokens.join(" "));
        }
        Commands::Sample { config, index } => {
            let file_config = FileConfig::from_file(&config)?;
            let (key, document) = run::sample_record(&file_config.workload, index);
            println!("{key}");
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    Ok(())
}
