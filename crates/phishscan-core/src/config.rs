use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::features::{PathTokenMetric, FEATURE_NAMES};
use crate::schema::{Schema, SchemaError};

/// Column header that holds the URLs in batch input files.
pub const DEFAULT_URL_COLUMN: &str = "URLs";

/// Columns the classifier was trained on, in training order (`[training]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub columns: Vec<String>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            columns: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Location of the trained model (`[model]`, or the legacy `[pickle]` table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model JSON file. Relative paths are resolved against the config file's directory.
    pub file_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("model.json"),
        }
    }
}

/// Feature extraction options (`[extractor]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// "segment_ratio" (default) or "mean_length"; must match how the model was trained.
    #[serde(default)]
    pub path_token_metric: PathTokenMetric,
}

fn default_url_column() -> String {
    DEFAULT_URL_COLUMN.to_string()
}

/// Batch prediction options (`[batch]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Header of the URL column in batch input files.
    #[serde(default = "default_url_column")]
    pub url_column: String,
    /// Extraction worker threads; if missing, available parallelism is used.
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            url_column: default_url_column(),
            workers: None,
        }
    }
}

/// Global configuration loaded from `~/.config/phishscan/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhishscanConfig {
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default, alias = "pickle")]
    pub model: ModelConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    /// Directory relative model paths are resolved against; set by the loader.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl PhishscanConfig {
    /// Validated column schema. Fails if the configured columns are not
    /// exactly the features the extractor produces.
    pub fn schema(&self) -> Result<Schema, SchemaError> {
        Schema::new(self.training.columns.iter().cloned())
    }

    /// Model file path, resolved against the config file's directory.
    pub fn model_path(&self) -> PathBuf {
        let path = &self.model.file_path;
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.clone(),
        }
    }

    /// Checks everything that can be checked without loading the model.
    pub fn validate(&self) -> Result<()> {
        self.schema().context("invalid [training] columns")?;
        if self.batch.url_column.trim().is_empty() {
            anyhow::bail!("[batch] url_column must not be empty");
        }
        if self.batch.workers == Some(0) {
            anyhow::bail!("[batch] workers must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from `path`.
pub fn load_from_path(path: &Path) -> Result<PhishscanConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let mut cfg: PhishscanConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.base_dir = path.parent().map(Path::to_path_buf);
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishscanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let mut default_cfg = PhishscanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg.base_dir = path.parent().map(Path::to_path_buf);
        return Ok(default_cfg);
    }

    load_from_path(&path)
}
