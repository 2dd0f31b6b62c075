//! Forest of binary decision trees.
//!
//! Trees are stored as parallel node arrays, the layout tree-ensemble
//! trainers export: node `i` is a leaf when `left[i] == -1`, otherwise it
//! splits on column `feature[i]` and goes left when the value is
//! `<= threshold[i]`. Each leaf's `value` is its phishing probability.

use serde::{Deserialize, Serialize};

use super::{Classifier, ClassifierError, FeatureMatrix, Label, ModelError};

const LEAF: i64 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    pub value: Vec<f64>,
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.feature.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.left[node] == LEAF
    }

    /// Checks array shapes and that every split points forward to an
    /// existing node, so evaluation always terminates at a leaf.
    fn validate(&self) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if [
            self.threshold.len(),
            self.left.len(),
            self.right.len(),
            self.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err("node arrays differ in length".to_string());
        }
        for node in 0..n {
            if self.is_leaf(node) {
                let v = self.value[node];
                if !(0.0..=1.0).contains(&v) {
                    return Err(format!("leaf {node} has probability {v} outside [0, 1]"));
                }
                continue;
            }
            if self.feature[node] < 0 {
                return Err(format!("split node {node} has no feature"));
            }
            if !self.threshold[node].is_finite() {
                return Err(format!("split node {node} has a non-finite threshold"));
            }
            for child in [self.left[node], self.right[node]] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(format!("split node {node} has invalid child {child}"));
                }
            }
        }
        Ok(())
    }

    fn max_feature(&self) -> Option<usize> {
        (0..self.node_count())
            .filter(|&i| !self.is_leaf(i))
            .map(|i| self.feature[i] as usize)
            .max()
    }

    /// Phishing probability of the leaf `row` lands in.
    fn leaf_value(&self, row: &[f64]) -> f64 {
        let mut node = 0usize;
        while !self.is_leaf(node) {
            let x = row[self.feature[node] as usize];
            node = if x <= self.threshold[node] {
                self.left[node] as usize
            } else {
                self.right[node] as usize
            };
        }
        self.value[node]
    }
}

/// Averages leaf probabilities over all trees; phishing when the mean is
/// strictly above one half.
///
/// Trees are walked without bounds checks beyond indexing, so a forest built
/// by hand must pass [`ForestModel::validate`] before it predicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestModel {
    pub model_id: String,
    /// Column names the model was trained on; `feature` indices refer to
    /// positions in this list.
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::NoTrees);
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate()
                .map_err(|reason| ModelError::InvalidTree { tree: i, reason })?;
            if let Some(max) = tree.max_feature() {
                if !self.feature_names.is_empty() && max >= self.feature_names.len() {
                    return Err(ModelError::InvalidTree {
                        tree: i,
                        reason: format!(
                            "feature index {max} beyond {} feature names",
                            self.feature_names.len()
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Highest column index any split reads, if the forest has splits.
    pub fn max_feature(&self) -> Option<usize> {
        self.trees.iter().filter_map(DecisionTree::max_feature).max()
    }

    /// Mean phishing probability of one row.
    pub fn probability(&self, row: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.leaf_value(row)).sum();
        total / self.trees.len() as f64
    }
}

impl Classifier for ForestModel {
    fn predict(&self, matrix: &FeatureMatrix) -> Result<Vec<Label>, ClassifierError> {
        let n_cols = matrix.n_cols();
        if let Some(index) = self.max_feature().filter(|&max| max >= n_cols) {
            return Err(ClassifierError::FeatureIndex { index, n_cols });
        }
        Ok(matrix
            .rows()
            .map(|row| Label::from(self.probability(row) > 0.5))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Single split on column `feature` at `threshold`, leaves `lo` / `hi`.
    fn stump(feature: i64, threshold: f64, lo: f64, hi: f64) -> DecisionTree {
        DecisionTree {
            feature: vec![feature, LEAF, LEAF],
            threshold: vec![threshold, 0.0, 0.0],
            left: vec![1, LEAF, LEAF],
            right: vec![2, LEAF, LEAF],
            value: vec![0.0, lo, hi],
        }
    }

    fn forest(trees: Vec<DecisionTree>) -> ForestModel {
        ForestModel {
            model_id: "f".to_string(),
            feature_names: Vec::new(),
            trees,
        }
    }

    fn matrix(rows: &[&[f64]]) -> FeatureMatrix {
        let cols: Arc<[String]> = vec!["x".to_string(), "y".to_string()].into();
        let mut m = FeatureMatrix::new(cols);
        for r in rows {
            m.push_row(r);
        }
        m
    }

    #[test]
    fn split_goes_left_on_equal() {
        let f = forest(vec![stump(0, 5.0, 0.0, 1.0)]);
        let labels = f.predict(&matrix(&[&[5.0, 0.0], &[5.1, 0.0]])).unwrap();
        assert_eq!(labels, [Label::Legitimate, Label::Phishing]);
    }

    #[test]
    fn averages_trees_and_tie_is_legitimate() {
        let f = forest(vec![stump(0, 5.0, 0.0, 1.0), stump(1, 5.0, 0.0, 1.0)]);
        // one tree says 1.0, the other 0.0 -> mean 0.5 -> legitimate
        assert_eq!(
            f.predict(&matrix(&[&[9.0, 0.0]])).unwrap(),
            [Label::Legitimate]
        );
        assert_eq!(
            f.predict(&matrix(&[&[9.0, 9.0]])).unwrap(),
            [Label::Phishing]
        );
    }

    #[test]
    fn deeper_tree() {
        // 0: x <= 1 ? 1 : 2 ; 1: leaf 0.1 ; 2: y <= 3 ? 3 : 4 ; 3: leaf 0.2 ; 4: leaf 0.9
        let tree = DecisionTree {
            feature: vec![0, LEAF, 1, LEAF, LEAF],
            threshold: vec![1.0, 0.0, 3.0, 0.0, 0.0],
            left: vec![1, LEAF, 3, LEAF, LEAF],
            right: vec![2, LEAF, 4, LEAF, LEAF],
            value: vec![0.0, 0.1, 0.0, 0.2, 0.9],
        };
        let f = forest(vec![tree]);
        assert!(f.validate().is_ok());
        let labels = f
            .predict(&matrix(&[&[0.0, 9.0], &[2.0, 1.0], &[2.0, 4.0]]))
            .unwrap();
        assert_eq!(
            labels,
            [Label::Legitimate, Label::Legitimate, Label::Phishing]
        );
    }

    #[test]
    fn feature_index_beyond_matrix_is_error() {
        let f = forest(vec![stump(7, 1.0, 0.0, 1.0)]);
        let err = f.predict(&matrix(&[&[0.0, 0.0]])).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::FeatureIndex { index: 7, n_cols: 2 }
        ));
    }

    #[test]
    fn validate_rejects_cycles_and_bad_shapes() {
        let mut t = stump(0, 1.0, 0.0, 1.0);
        t.left[0] = 0;
        assert!(matches!(
            forest(vec![t]).validate(),
            Err(ModelError::InvalidTree { tree: 0, .. })
        ));

        let mut t = stump(0, 1.0, 0.0, 1.0);
        t.value.pop();
        assert!(forest(vec![t]).validate().is_err());

        let t = stump(0, 1.0, 0.0, 1.5);
        assert!(forest(vec![t]).validate().is_err());

        assert!(matches!(forest(vec![]).validate(), Err(ModelError::NoTrees)));
    }

    #[test]
    fn validate_checks_feature_names_width() {
        let mut f = forest(vec![stump(2, 1.0, 0.0, 1.0)]);
        f.feature_names = vec!["a".to_string(), "b".to_string()];
        assert!(f.validate().is_err());
        f.feature_names.push("c".to_string());
        assert!(f.validate().is_ok());
    }
}
