//! Tests for batch.

use super::parse;
use crate::cli::CliCommand;
use std::path::PathBuf;

#[test]
fn cli_parse_batch() {
    match parse(&["phishscan", "batch", "urls.csv"]) {
        CliCommand::Batch { path, output } => {
            assert_eq!(path, PathBuf::from("urls.csv"));
            assert!(output.is_none());
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_output() {
    match parse(&["phishscan", "batch", "urls.csv", "--output", "out.csv"]) {
        CliCommand::Batch { path, output } => {
            assert_eq!(path, PathBuf::from("urls.csv"));
            assert_eq!(output, Some(PathBuf::from("out.csv")));
        }
        _ => panic!("expected Batch with output"),
    }
}

#[test]
fn cli_parse_batch_short_output() {
    match parse(&["phishscan", "batch", "in.csv", "-o", "out.csv"]) {
        CliCommand::Batch { output, .. } => assert_eq!(output, Some(PathBuf::from("out.csv"))),
        _ => panic!("expected Batch"),
    }
}
