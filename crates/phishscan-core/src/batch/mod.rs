//! Batch files: a single-column CSV of URLs in, the same rows plus a
//! `Prediction` column out.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::model::Label;

/// Header of the column appended to batch output.
pub const PREDICTION_COLUMN: &str = "Prediction";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batch file has no header row")]
    MissingHeader,
    #[error("batch file must have exactly one column, found {0}")]
    NotSingleColumn(usize),
    #[error("batch file column is {found:?}, expected {expected:?}")]
    WrongHeader { expected: String, found: String },
    #[error("{urls} URLs but {labels} labels")]
    LengthMismatch { urls: usize, labels: usize },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Counts of a batch's verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub legitimate: usize,
    pub phishing: usize,
}

impl BatchSummary {
    pub fn from_labels(labels: &[Label]) -> Self {
        let phishing = labels.iter().filter(|l| l.is_phishing()).count();
        Self {
            total: labels.len(),
            legitimate: labels.len() - phishing,
            phishing,
        }
    }
}

/// Reads the URL column from a single-column CSV whose header is `url_column`.
///
/// Blank lines are skipped; every other row is kept, including empty
/// cells, so row indices line up with the predictions.
pub fn read_urls<R: Read>(reader: R, url_column: &str) -> Result<Vec<String>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    match headers.len() {
        0 => return Err(BatchError::MissingHeader),
        1 => {}
        n => return Err(BatchError::NotSingleColumn(n)),
    }
    let found = headers.get(0).unwrap_or_default().trim();
    if found != url_column {
        return Err(BatchError::WrongHeader {
            expected: url_column.to_string(),
            found: found.to_string(),
        });
    }

    let mut urls = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() != 1 {
            return Err(BatchError::NotSingleColumn(record.len()));
        }
        urls.push(record.get(0).unwrap_or_default().to_string());
    }
    Ok(urls)
}

pub fn read_urls_from_path(path: &Path, url_column: &str) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_urls(file, url_column).with_context(|| format!("read batch file {}", path.display()))
}

/// Writes `urls` with their labels as a two-column CSV.
pub fn write_predictions<W: Write>(
    writer: W,
    url_column: &str,
    urls: &[String],
    labels: &[Label],
) -> Result<(), BatchError> {
    if urls.len() != labels.len() {
        return Err(BatchError::LengthMismatch {
            urls: urls.len(),
            labels: labels.len(),
        });
    }
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([url_column, PREDICTION_COLUMN])?;
    for (url, label) in urls.iter().zip(labels) {
        wtr.write_record([url.as_str(), &label.as_u8().to_string()])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_predictions_to_path(
    path: &Path,
    url_column: &str,
    urls: &[String],
    labels: &[Label],
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_predictions(file, url_column, urls, labels)
        .with_context(|| format!("write predictions to {}", path.display()))
}
