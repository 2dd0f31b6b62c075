//! Classifier interface and the model backends that implement it.
//!
//! The dispatcher only knows [`Classifier`]: one `predict` call from a
//! [`FeatureMatrix`] to one [`Label`] per row. Trained models are loaded from
//! JSON files (see [`Model::from_file`]) and come in two families, a
//! logistic regression and a forest of decision trees.

mod error;
mod forest;
mod label;
mod logistic;
mod matrix;

pub use error::{ClassifierError, ModelError};
pub use forest::{DecisionTree, ForestModel};
pub use label::Label;
pub use logistic::LogisticModel;
pub use matrix::FeatureMatrix;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::schema::{Schema, SchemaError};

/// A trained binary classifier.
///
/// Implementations must return exactly one label per matrix row, in row
/// order, and must not mutate shared state.
pub trait Classifier: Send + Sync {
    fn predict(&self, matrix: &FeatureMatrix) -> Result<Vec<Label>, ClassifierError>;
}

/// Any model loadable from a model file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Model {
    Logistic(LogisticModel),
    Forest(ForestModel),
}

impl Model {
    /// Parse and validate a model from JSON.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(ModelError::ParseJson)?;
        model.validate()?;
        Ok(model)
    }

    /// Load a model from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&content)?;
        tracing::info!(
            model_id = model.model_id(),
            kind = model.kind(),
            path = %path.display(),
            "loaded model"
        );
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Model::Logistic(m) => m.validate(),
            Model::Forest(m) => m.validate(),
        }
    }

    pub fn model_id(&self) -> &str {
        match self {
            Model::Logistic(m) => &m.model_id,
            Model::Forest(m) => &m.model_id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Model::Logistic(_) => "logistic",
            Model::Forest(_) => "forest",
        }
    }

    /// Checks that the model reads only columns `schema` provides: recorded
    /// feature names must equal the schema, logistic weights must name schema
    /// columns and forest splits must index inside the schema width.
    pub fn check_schema(&self, schema: &Schema) -> Result<(), SchemaError> {
        schema.check_model_columns(self.feature_names())?;
        match self {
            Model::Logistic(m) => {
                if let Some(name) = m
                    .weights
                    .keys()
                    .find(|name| !schema.columns().contains(*name))
                {
                    return Err(SchemaError::ModelColumn(name.clone()));
                }
            }
            Model::Forest(m) => {
                if let Some(index) = m.max_feature().filter(|&max| max >= schema.len()) {
                    return Err(SchemaError::ModelFeatureIndex {
                        index,
                        columns: schema.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Column names the model was trained on (may be empty if not recorded).
    pub fn feature_names(&self) -> &[String] {
        match self {
            Model::Logistic(m) => &m.feature_names,
            Model::Forest(m) => &m.feature_names,
        }
    }
}

impl Classifier for Model {
    fn predict(&self, matrix: &FeatureMatrix) -> Result<Vec<Label>, ClassifierError> {
        match self {
            Model::Logistic(m) => m.predict(matrix),
            Model::Forest(m) => m.predict(matrix),
        }
    }
}
