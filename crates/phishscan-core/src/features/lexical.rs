//! Length, count and ratio features of the raw URL and its components.
//!
//! All lengths are in characters, not bytes.

use super::charclass::{is_alphanumeric, is_digit, is_letter};
use super::{FeatureVector, PathTokenMetric};
use crate::url_model::ParsedUrl;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Length of the longest `/`-delimited token of `s` (0 for empty input).
fn longest_token_len(s: &str) -> usize {
    s.split('/').map(char_len).max().unwrap_or(0)
}

/// Characters matched by `[^A-Za-z0-9./-]`.
fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || matches!(c, '.' | '/' | '-'))
}

fn path_token_value(trimmed_path: &str, metric: PathTokenMetric) -> f64 {
    let tokens: Vec<&str> = trimmed_path.split('/').collect();
    let count = tokens.len();
    match metric {
        PathTokenMetric::SegmentRatio => count as f64 / count.max(1) as f64,
        PathTokenMetric::MeanLength => {
            let total: usize = tokens.iter().map(|t| char_len(t)).sum();
            total as f64 / count.max(1) as f64
        }
    }
}

pub(super) fn domain_features(
    url: &str,
    parsed: &ParsedUrl,
    metric: PathTokenMetric,
) -> FeatureVector {
    let domain = parsed.domain.as_str();
    let path = parsed.trimmed_path();
    let url_len = char_len(url);
    let filename = path.rsplit('/').next().unwrap_or("");

    let mut v = FeatureVector::with_capacity(super::FEATURE_COUNT);
    v.insert("domain_token_count", domain.split('.').count() as f64);
    v.insert("avgpathtokenlen", path_token_value(path, metric));
    v.insert("urlLen", url_len as f64);
    v.insert("domainlength", char_len(domain) as f64);
    v.insert(
        "ArgUrlRatio",
        char_len(&parsed.query) as f64 / url_len.max(1) as f64,
    );
    v.insert(
        "NumberofDotsinURL",
        url.chars().filter(|&c| c == '.').count() as f64,
    );
    v.insert(
        "URL_DigitCount",
        url.chars().filter(|&c| is_digit(c)).count() as f64,
    );
    v.insert("LongestPathTokenLength", longest_token_len(url) as f64);
    v.insert(
        "Filename_LetterCount",
        filename.chars().filter(|&c| is_letter(c)).count() as f64,
    );
    v.insert("Path_LongestWordLength", longest_token_len(path) as f64);
    v.insert(
        "spcharUrl",
        url.chars().filter(|&c| is_special(c)).count() as f64,
    );
    v
}

/// `NumberRate_Domain`: share of alphanumeric characters in the domain.
/// An empty domain has no characters to rate and yields 0.
pub(super) fn number_features(domain: &str) -> FeatureVector {
    let len = char_len(domain);
    let rate = if len == 0 {
        0.0
    } else {
        domain.chars().filter(|&c| is_alphanumeric(c)).count() as f64 / len as f64
    };
    let mut v = FeatureVector::with_capacity(1);
    v.insert("NumberRate_Domain", rate);
    v
}
