//! `phishscan check <url>` – classify one URL.

use anyhow::Result;
use phishscan_core::config::PhishscanConfig;
use phishscan_core::url_model::validate_url;
use phishscan_core::PredictionDispatcher;

pub fn run_check(cfg: &PhishscanConfig, url: &str, strict: bool) -> Result<()> {
    if strict {
        validate_url(url)?;
    }
    let dispatcher = PredictionDispatcher::from_config(cfg)?;
    let label = dispatcher.predict_one(url)?;
    tracing::info!(url, label = label.as_u8(), "checked url");
    println!("{}: {}", url, label);
    Ok(())
}
