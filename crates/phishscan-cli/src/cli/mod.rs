//! CLI for the phishscan URL classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishscan_core::config::{self, PhishscanConfig};
use std::path::{Path, PathBuf};

use commands::{run_batch, run_check, run_features, run_validate_config};

/// Top-level CLI for phishscan.
#[derive(Debug, Parser)]
#[command(name = "phishscan")]
#[command(about = "phishscan: lexical phishing URL classifier", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/phishscan/config.toml, created on first use).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a single URL.
    Check {
        /// URL to classify.
        url: String,

        /// Reject anything that is not an absolute http(s) URL with a host.
        #[arg(long)]
        strict: bool,
    },

    /// Print the extracted features of a URL as JSON.
    Features {
        /// URL to analyse.
        url: String,
    },

    /// Classify every URL of a single-column CSV file.
    Batch {
        /// Input CSV; its only column must be the configured URL column.
        path: PathBuf,

        /// Write predictions here instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Load config and model and run every consistency check.
    ValidateConfig,
}

fn load_config(path: Option<&Path>) -> Result<PhishscanConfig> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url, strict } => run_check(&cfg, &url, strict)?,
            CliCommand::Features { url } => run_features(&cfg, &url)?,
            CliCommand::Batch { path, output } => {
                run_batch(&cfg, &path, output.as_deref()).await?
            }
            CliCommand::ValidateConfig => run_validate_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
