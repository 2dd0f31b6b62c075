//! `phishscan batch <csv>` – classify every URL of a CSV file.

use anyhow::{Context, Result};
use phishscan_core::batch::{self, BatchSummary};
use phishscan_core::config::PhishscanConfig;
use phishscan_core::PredictionDispatcher;
use std::path::Path;

fn print_summary(summary: &BatchSummary) {
    eprintln!(
        "{} URLs: {} legitimate, {} phishing",
        summary.total, summary.legitimate, summary.phishing
    );
}

pub async fn run_batch(cfg: &PhishscanConfig, path: &Path, output: Option<&Path>) -> Result<()> {
    let summary = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        let path = path.to_path_buf();
        let output = output.map(Path::to_path_buf);
        move || predict_file(&cfg, &path, output.as_deref())
    })
    .await
    .context("batch task join")??;
    print_summary(&summary);
    Ok(())
}

fn predict_file(cfg: &PhishscanConfig, path: &Path, output: Option<&Path>) -> Result<BatchSummary> {
    let url_column = &cfg.batch.url_column;
    let urls = batch::read_urls_from_path(path, url_column)?;
    let dispatcher = PredictionDispatcher::from_config(cfg)?;
    let labels = dispatcher.predict_many(&urls)?;

    match output {
        Some(out) => batch::write_predictions_to_path(out, url_column, &urls, &labels)?,
        None => batch::write_predictions(std::io::stdout().lock(), url_column, &urls, &labels)
            .context("write predictions to stdout")?,
    }

    let summary = BatchSummary::from_labels(&labels);
    tracing::info!(
        path = %path.display(),
        total = summary.total,
        phishing = summary.phishing,
        "batch finished"
    );
    Ok(summary)
}
