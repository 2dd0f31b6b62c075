//! Logistic regression over named features.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Classifier, ClassifierError, FeatureMatrix, Label, ModelError};

fn default_threshold() -> f64 {
    0.5
}

/// Linear model: phishing when `sigmoid(w·x + bias) >= threshold`.
///
/// Weights are keyed by column name, so the model does not depend on the
/// matrix column order; columns without a weight contribute nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub model_id: String,
    /// Column names the model was trained on, in training order.
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub weights: BTreeMap<String, f64>,
    pub bias: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticModel {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weights.is_empty() {
            return Err(ModelError::NoWeights);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        for (name, &value) in &self.weights {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteWeight {
                    name: name.clone(),
                    value,
                });
            }
        }
        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }
        Ok(())
    }

    /// Weight per matrix column, 0 for columns the model has no weight for.
    fn column_weights(&self, matrix: &FeatureMatrix) -> Result<Vec<f64>, ClassifierError> {
        if let Some(missing) = self
            .weights
            .keys()
            .find(|name| matrix.column_index(name).is_none())
        {
            return Err(ClassifierError::MissingColumn(missing.clone()));
        }
        Ok(matrix
            .columns()
            .iter()
            .map(|c| self.weights.get(c).copied().unwrap_or(0.0))
            .collect())
    }

    /// Phishing probability of one row given per-column weights.
    fn probability(&self, weights: &[f64], row: &[f64]) -> f64 {
        let z = weights
            .iter()
            .zip(row)
            .fold(self.bias, |acc, (w, x)| acc + w * x);
        1.0 / (1.0 + (-z).exp())
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, matrix: &FeatureMatrix) -> Result<Vec<Label>, ClassifierError> {
        let weights = self.column_weights(matrix)?;
        matrix
            .rows()
            .enumerate()
            .map(|(i, row)| {
                if let Some(col) = row.iter().position(|x| !x.is_finite()) {
                    return Err(ClassifierError::NonFiniteInput {
                        row: i,
                        column: matrix.columns()[col].clone(),
                    });
                }
                Ok(Label::from(self.probability(&weights, row) >= self.threshold))
            })
            .collect()
    }
}
