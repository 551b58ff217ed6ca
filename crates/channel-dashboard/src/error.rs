//! Dashboard error types.

use thiserror::Error;

/// Errors that can occur while binding widgets to generated datasets.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A widget series refers to a field its dataset does not have.
    #[error("Widget '{widget}' refers to unknown series key '{key}'")]
    UnknownSeriesKey { widget: String, key: String },

    /// A treemap widget selects a quarter missing from the data.
    #[error("Widget '{widget}' selects quarter {quarter}, which has no data")]
    MissingQuarter { widget: String, quarter: String },

    /// A palette needs at least one colour.
    #[error("Palette must contain at least one colour")]
    EmptyPalette,
}

impl DashboardError {
    /// Create an unknown series key error.
    pub fn unknown_series(widget: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownSeriesKey {
            widget: widget.into(),
            key: key.into(),
        }
    }
}

/// Result alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
