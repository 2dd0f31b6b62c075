//! Prediction dispatch: URL(s) → features → schema-ordered matrix → labels.
//!
//! A [`PredictionDispatcher`] owns a shared classifier and a validated
//! [`Schema`]. Both are immutable, so one dispatcher can serve any number of
//! callers. Every call makes exactly one classifier invocation, for a single
//! URL or for a whole batch.

mod pool;

pub use pool::default_workers;

use std::sync::Arc;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::PhishscanConfig;
use crate::features::{self, FeatureVector, PathTokenMetric};
use crate::model::{Classifier, ClassifierError, Label, Model};
use crate::schema::{Schema, SchemaError};

#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("classifier failed: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("classifier returned {got} labels for {expected} rows")]
    LabelCount { expected: usize, got: usize },
}

/// One URL of a batch with its features and verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub url: String,
    pub features: FeatureVector,
    pub label: Label,
}

pub struct PredictionDispatcher {
    classifier: Arc<dyn Classifier>,
    schema: Schema,
    path_token_metric: PathTokenMetric,
    workers: usize,
}

impl std::fmt::Debug for PredictionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionDispatcher")
            .field("schema", &self.schema)
            .field("path_token_metric", &self.path_token_metric)
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

impl PredictionDispatcher {
    pub fn new(classifier: Arc<dyn Classifier>, schema: Schema) -> Self {
        Self {
            classifier,
            schema,
            path_token_metric: PathTokenMetric::default(),
            workers: default_workers(),
        }
    }

    /// Validates `columns` and builds a dispatcher; fails on any schema mismatch.
    pub fn from_columns<I, S>(
        classifier: Arc<dyn Classifier>,
        columns: I,
    ) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(classifier, Schema::new(columns)?))
    }

    /// Loads the configured model and validates it and the column list
    /// against the extractor before any prediction can run.
    pub fn from_config(cfg: &PhishscanConfig) -> Result<Self> {
        let schema = cfg.schema()?;
        let model_path = cfg.model_path();
        let model = Model::from_file(&model_path)
            .with_context(|| format!("load model {}", model_path.display()))?;
        model
            .check_schema(&schema)
            .context("model does not match the configured columns")?;

        let dispatcher = Self::new(Arc::new(model), schema)
            .with_path_token_metric(cfg.extractor.path_token_metric)
            .with_workers(cfg.batch.workers.unwrap_or_else(default_workers));
        tracing::debug!(?dispatcher, "dispatcher ready");
        Ok(dispatcher)
    }

    pub fn with_path_token_metric(mut self, metric: PathTokenMetric) -> Self {
        self.path_token_metric = metric;
        self
    }

    /// Upper bound on extraction threads for batches (at least 1).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Feature vector of `url` as this dispatcher computes it.
    pub fn features(&self, url: &str) -> FeatureVector {
        features::extract(url, self.path_token_metric)
    }

    pub fn predict_one(&self, url: &str) -> Result<Label, PredictError> {
        let features = self.features(url);
        let mut labels = self.classify(std::slice::from_ref(&features))?;
        Ok(labels.remove(0))
    }

    /// Labels for `urls`, index-aligned with the input.
    ///
    /// An empty batch returns no labels without calling the classifier.
    pub fn predict_many<S>(&self, urls: &[S]) -> Result<Vec<Label>, PredictError>
    where
        S: AsRef<str> + Sync,
    {
        if urls.is_empty() {
            return Ok(Vec::new());
        }
        let features = pool::extract_all(urls, self.path_token_metric, self.workers);
        self.classify(&features)
    }

    /// Like [`predict_many`](Self::predict_many) but keeps each URL's features.
    pub fn predict_batch<S>(&self, urls: &[S]) -> Result<Vec<Prediction>, PredictError>
    where
        S: AsRef<str> + Sync,
    {
        if urls.is_empty() {
            return Ok(Vec::new());
        }
        let features = pool::extract_all(urls, self.path_token_metric, self.workers);
        let labels = self.classify(&features)?;
        Ok(urls
            .iter()
            .zip(features)
            .zip(labels)
            .map(|((url, features), label)| Prediction {
                url: url.as_ref().to_string(),
                features,
                label,
            })
            .collect())
    }

    /// Projects `rows` in schema order and makes the single classifier call.
    fn classify(&self, rows: &[FeatureVector]) -> Result<Vec<Label>, PredictError> {
        let matrix = self.schema.matrix(rows)?;
        tracing::debug!(rows = matrix.n_rows(), "invoking classifier");
        let labels = self.classifier.predict(&matrix).map_err(|e| {
            tracing::warn!(error = %e, rows = matrix.n_rows(), "classifier failed");
            e
        })?;
        if labels.len() != matrix.n_rows() {
            return Err(PredictError::LabelCount {
                expected: matrix.n_rows(),
                got: labels.len(),
            });
        }
        Ok(labels)
    }
}
