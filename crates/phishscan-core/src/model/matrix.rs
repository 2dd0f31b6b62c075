//! Row-major numeric matrix handed to a classifier.

use std::sync::Arc;

/// Feature rows with named columns, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    columns: Arc<[String]>,
    data: Vec<f64>,
    rows: usize,
}

impl FeatureMatrix {
    pub fn new(columns: Arc<[String]>) -> Self {
        Self::with_capacity(columns, 0)
    }

    pub fn with_capacity(columns: Arc<[String]>, rows: usize) -> Self {
        let width = columns.len();
        Self {
            columns,
            data: Vec::with_capacity(rows * width),
            rows: 0,
        }
    }

    /// Appends one row. Panics if the row width differs from the column count.
    pub fn push_row(&mut self, row: &[f64]) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row width must equal the column count"
        );
        self.data.extend_from_slice(row);
        self.rows += 1;
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows {
            return None;
        }
        let width = self.n_cols();
        Some(&self.data[index * width..(index + 1) * width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).filter_map(move |i| self.row(i))
    }
}
