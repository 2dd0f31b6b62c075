//! Stub classifiers shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use phishscan_core::model::{Classifier, ClassifierError, FeatureMatrix, Label};

/// Returns a fixed label for every row and keeps every matrix it is given.
pub struct Recording {
    label: Label,
    seen: Mutex<Vec<FeatureMatrix>>,
}

impl Recording {
    pub fn new(label: Label) -> Self {
        Self {
            label,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn matrices(&self) -> Vec<FeatureMatrix> {
        self.seen.lock().unwrap().clone()
    }
}

impl Classifier for Recording {
    fn predict(&self, matrix: &FeatureMatrix) -> Result<Vec<Label>, ClassifierError> {
        self.seen.lock().unwrap().push(matrix.clone());
        Ok(vec![self.label; matrix.n_rows()])
    }
}

/// Phishing iff the named column is above `threshold`.
pub struct ColumnAbove {
    pub column: &'static str,
    pub threshold: f64,
}

impl Classifier for ColumnAbove {
    fn predict(&self, matrix: &FeatureMatrix) -> Result<Vec<Label>, ClassifierError> {
        let col = matrix
            .column_index(self.column)
            .ok_or_else(|| ClassifierError::MissingColumn(self.column.to_string()))?;
        Ok(matrix
            .rows()
            .map(|row| Label::from(row[col] > self.threshold))
            .collect())
    }
}

/// Writes `contents` to `name` under `dir` and returns the path.
pub fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
