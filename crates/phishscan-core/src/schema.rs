//! Column schema: the ordered feature names a classifier was trained on.
//!
//! A [`Schema`] can only be built from a column list that is a permutation of
//! [`FEATURE_NAMES`], so every validated schema can project every feature
//! vector. Any disagreement is a [`SchemaError`] at construction time.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use crate::model::FeatureMatrix;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("schema has {got} columns, the extractor produces {expected}")]
    ColumnCount { expected: usize, got: usize },
    #[error("schema column {0:?} is not a feature the extractor produces")]
    UnknownColumn(String),
    #[error("schema column {0:?} appears more than once")]
    DuplicateColumn(String),
    #[error("feature vector has no value for column {0:?}")]
    MissingFeature(String),
    #[error("model weights column {0:?}, which is not in the configured schema")]
    ModelColumn(String),
    #[error("model reads feature index {index}, the configured schema has {columns} columns")]
    ModelFeatureIndex { index: usize, columns: usize },
    #[error("model was trained on columns {model:?}, configured schema is {configured:?}")]
    ModelColumns {
        model: Vec<String>,
        configured: Vec<String>,
    },
}

/// Validated, immutable column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Arc<[String]>,
}

impl Schema {
    /// Validates `columns` against the extractor's feature names.
    pub fn new<I, S>(columns: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !FEATURE_NAMES.contains(&column.as_str()) {
                return Err(SchemaError::UnknownColumn(column.clone()));
            }
            if !seen.insert(column.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.clone()));
            }
        }
        if columns.len() != FEATURE_COUNT {
            return Err(SchemaError::ColumnCount {
                expected: FEATURE_COUNT,
                got: columns.len(),
            });
        }

        Ok(Self {
            columns: columns.into(),
        })
    }

    /// The extractor's own feature order.
    pub fn canonical() -> Self {
        Self {
            columns: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Checks that a model's recorded feature names equal this schema.
    /// Models that recorded no names are accepted as-is.
    pub fn check_model_columns(&self, model_columns: &[String]) -> Result<(), SchemaError> {
        if model_columns.is_empty() || model_columns == self.columns() {
            return Ok(());
        }
        Err(SchemaError::ModelColumns {
            model: model_columns.to_vec(),
            configured: self.columns.to_vec(),
        })
    }

    /// Projects a named feature vector into a row in schema order.
    pub fn project(&self, features: &FeatureVector) -> Result<Vec<f64>, SchemaError> {
        self.columns
            .iter()
            .map(|column| {
                features
                    .get(column)
                    .ok_or_else(|| SchemaError::MissingFeature(column.clone()))
            })
            .collect()
    }

    /// `features` with its entries rearranged into schema order.
    pub fn reorder(&self, features: &FeatureVector) -> Result<FeatureVector, SchemaError> {
        let mut ordered = FeatureVector::with_capacity(self.len());
        for column in self.columns.iter() {
            let (name, value) = features
                .iter()
                .find(|(name, _)| *name == column.as_str())
                .ok_or_else(|| SchemaError::MissingFeature(column.clone()))?;
            ordered.insert(name, value);
        }
        Ok(ordered)
    }

    /// Projects every vector into one matrix, rows in input order.
    pub fn matrix<'a, I>(&self, rows: I) -> Result<FeatureMatrix, SchemaError>
    where
        I: IntoIterator<Item = &'a FeatureVector>,
    {
        let rows = rows.into_iter();
        let mut matrix =
            FeatureMatrix::with_capacity(Arc::clone(&self.columns), rows.size_hint().0);
        for features in rows {
            matrix.push_row(&self.project(features)?);
        }
        Ok(matrix)
    }
}
