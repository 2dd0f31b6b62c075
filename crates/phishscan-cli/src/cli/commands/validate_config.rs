//! `phishscan validate-config` – check config, columns and model together.

use anyhow::Result;
use phishscan_core::config::PhishscanConfig;
use phishscan_core::PredictionDispatcher;

pub fn run_validate_config(cfg: &PhishscanConfig) -> Result<()> {
    let dispatcher = PredictionDispatcher::from_config(cfg)?;
    println!(
        "config OK: {} columns, model {}",
        dispatcher.schema().len(),
        cfg.model_path().display()
    );
    Ok(())
}
