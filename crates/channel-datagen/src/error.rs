//! Datagen error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring, generating or exporting datasets.
#[derive(Error, Debug)]
pub enum DatagenError {
    /// A sampling range has its bounds inverted.
    #[error("Invalid range for '{field}': min {min} is greater than max {max}")]
    InvalidRange { field: String, min: i64, max: i64 },

    /// A sampling bound is too large to draw from exactly.
    #[error("Invalid bound for '{field}': {value} is outside +/-{limit}")]
    BoundTooLarge { field: String, value: i64, limit: i64 },

    /// A probability threshold lies outside [0, 1].
    #[error("Invalid threshold for '{field}': {value} is outside [0, 1]")]
    InvalidThreshold { field: String, value: f64 },

    /// A waterfall scale factor is not a positive finite number.
    #[error("Invalid scale factor for '{field}': {value}")]
    InvalidScale { field: String, value: f64 },

    /// A label could not be parsed into one of the fixed vocabularies.
    #[error("Unknown {kind} label: '{value}'")]
    UnknownLabel { kind: &'static str, value: String },

    /// Failed to read or parse a configuration file.
    #[error("Failed to load configuration file: {path}\n{message}")]
    ConfigLoad { path: PathBuf, message: String },

    /// A dataset row does not enumerate the fixed category set.
    #[error("Dataset '{dataset}' row '{row}' does not cover the category set in order")]
    CategoryCoverage { dataset: String, row: String },

    /// A dataset has the wrong number of rows.
    #[error("Dataset '{dataset}' has {actual} rows, expected {expected}")]
    RowCount {
        dataset: String,
        expected: usize,
        actual: usize,
    },

    /// A waterfall's cumulative chain is broken.
    #[error("Waterfall '{key}' chain broken at segment {index}: {message}")]
    BrokenChain {
        key: String,
        index: usize,
        message: String,
    },

    /// Serialization to an output format failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DatagenError {
    /// Create an invalid range error.
    pub fn invalid_range(field: impl Into<String>, min: i64, max: i64) -> Self {
        Self::InvalidRange {
            field: field.into(),
            min,
            max,
        }
    }

    /// Create a broken chain error.
    pub fn broken_chain(key: impl Into<String>, index: usize, message: impl Into<String>) -> Self {
        Self::BrokenChain {
            key: key.into(),
            index,
            message: message.into(),
        }
    }
}

/// Result alias for datagen operations.
pub type Result<T> = std::result::Result<T, DatagenError>;
