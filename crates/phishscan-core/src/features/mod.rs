//! Lexical URL features.
//!
//! [`FeatureExtractor`] turns one URL string into a [`FeatureVector`]: a
//! fixed, ordered set of named numeric features. Extraction is pure and
//! total: no I/O, no lookups, and every string (including garbage) yields a
//! complete vector of finite values.

mod charclass;
mod entropy;
mod lexical;
mod vector;

pub use entropy::{shannon_entropy, PRINTABLE};
pub use vector::FeatureVector;

use serde::{Deserialize, Serialize};

use crate::url_model::ParsedUrl;

/// Names of every feature the extractor produces, in canonical order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "domain_token_count",
    "avgpathtokenlen",
    "urlLen",
    "domainlength",
    "ArgUrlRatio",
    "NumberofDotsinURL",
    "URL_DigitCount",
    "LongestPathTokenLength",
    "Filename_LetterCount",
    "Path_LongestWordLength",
    "spcharUrl",
    "NumberRate_Domain",
    "Entropy_Domain",
];

pub const FEATURE_COUNT: usize = 13;

/// How `avgpathtokenlen` is computed.
///
/// Existing trained models expect `SegmentRatio`, which is the
/// segment count divided by itself and therefore always 1. `MeanLength` is
/// the average segment length, for models trained with that metric instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathTokenMetric {
    #[default]
    SegmentRatio,
    MeanLength,
}

/// Computes the feature vector of a single URL.
#[derive(Debug, Clone)]
pub struct FeatureExtractor<'a> {
    url: &'a str,
    parsed: ParsedUrl,
    path_token_metric: PathTokenMetric,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(url: &'a str) -> Self {
        Self {
            url,
            parsed: ParsedUrl::parse(url),
            path_token_metric: PathTokenMetric::default(),
        }
    }

    pub fn with_path_token_metric(mut self, metric: PathTokenMetric) -> Self {
        self.path_token_metric = metric;
        self
    }

    pub fn parsed(&self) -> &ParsedUrl {
        &self.parsed
    }

    /// Structural features of the domain, path and raw URL string.
    pub fn domain_features(&self) -> FeatureVector {
        lexical::domain_features(self.url, &self.parsed, self.path_token_metric)
    }

    /// `NumberRate_Domain`.
    pub fn number_features(&self) -> FeatureVector {
        lexical::number_features(&self.parsed.domain)
    }

    /// `Entropy_Domain`.
    pub fn entropy_features(&self) -> FeatureVector {
        let mut v = FeatureVector::with_capacity(1);
        v.insert("Entropy_Domain", shannon_entropy(&self.parsed.domain));
        v
    }

    /// Every feature, in [`FEATURE_NAMES`] order.
    pub fn all_features(&self) -> FeatureVector {
        let mut all = self.domain_features();
        all.merge(self.number_features());
        all.merge(self.entropy_features());
        all
    }
}

/// Extracts the features of `url` with the given path-token metric.
pub fn extract(url: &str, metric: PathTokenMetric) -> FeatureVector {
    FeatureExtractor::new(url)
        .with_path_token_metric(metric)
        .all_features()
}
