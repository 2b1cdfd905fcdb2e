//! Dataset analysis - descriptive statistics, correlation, hypothesis tests

pub mod dataset;
pub mod stats;

pub use dataset::Dataset;
pub use stats::{
    correlate, describe, hypothesis_test, ColumnSummary, CorrelationMatrix, TestKind, TestOutcome,
    ALPHA,
};

use thiserror::Error;

/// Errors from dataset loading and statistical routines
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read dataset: {0}")]
    Read(String),

    #[error("no such column: {0}")]
    UnknownColumn(String),

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("unsupported test kind: '{0}'. Use 't-test' or 'mann-whitney'")]
    UnsupportedTestKind(String),

    #[error("grouping column must have exactly 2 categories, found {0}")]
    GroupCount(usize),
}
