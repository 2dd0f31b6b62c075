//! Model loading and prediction errors.

use std::path::PathBuf;

use thiserror::Error;

/// A model file could not be read or is structurally unsound.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("read model file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model JSON parse error: {0}")]
    ParseJson(#[source] serde_json::Error),
    #[error("threshold {0} not in [0, 1]")]
    InvalidThreshold(f64),
    #[error("non-finite weight for {name}: {value}")]
    NonFiniteWeight { name: String, value: f64 },
    #[error("non-finite bias: {0}")]
    NonFiniteBias(f64),
    #[error("model has no weights")]
    NoWeights,
    #[error("forest has no trees")]
    NoTrees,
    #[error("tree {tree}: {reason}")]
    InvalidTree { tree: usize, reason: String },
}

/// A classifier failed to produce labels for a matrix.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("matrix has no column {0:?} required by the model")]
    MissingColumn(String),
    #[error("model reads feature index {index} but the matrix has {n_cols} columns")]
    FeatureIndex { index: usize, n_cols: usize },
    #[error("non-finite input at row {row}, column {column:?}")]
    NonFiniteInput { row: usize, column: String },
    #[error("classifier backend: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}
