//! `phishscan features <url>` – dump the feature vector as JSON.

use anyhow::Result;
use phishscan_core::config::PhishscanConfig;
use phishscan_core::features;

pub fn run_features(cfg: &PhishscanConfig, url: &str) -> Result<()> {
    let schema = cfg.schema()?;
    let extracted = features::extract(url, cfg.extractor.path_token_metric);
    let ordered = schema.reorder(&extracted)?;
    println!("{}", serde_json::to_string_pretty(&ordered)?);
    Ok(())
}
