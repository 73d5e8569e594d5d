//! Error types for JobScope
//!
//! One enum covers both fatal ingestion failures and the per-panel conditions
//! (absent optional columns, too little data) that only degrade a single chart.

use thiserror::Error;

/// How a condition should be surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation failed; show an error
    Error,
    /// The chart ran but is not meaningful; show a warning placeholder
    Warning,
    /// The chart was skipped on purpose; show an informational notice
    Info,
}

/// Main error type for JobScope operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// The uploaded table lacks a column ingestion cannot do without
    #[error("Required column '{column}' is missing")]
    MissingRequiredColumn { column: String },

    /// A query's source column is absent, so the query is skipped
    #[error("Column '{column}' is not present in this dataset")]
    OptionalColumnAbsent { column: String },

    /// A query ran but produced too little to chart
    #[error("Insufficient data: {operation} requires more than {required}, but got {actual}")]
    InsufficientData {
        operation: String,
        required: usize,
        actual: usize,
    },

    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for JobScope operations
pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::FileIo(e) => format!("Cannot process file: {}", e),
            DashboardError::Polars(e) => format!("Cannot process file: {}", e),
            DashboardError::Config(msg) => format!("Config error: {}", msg),
            DashboardError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            DashboardError::MissingRequiredColumn { column } => {
                format!("Cannot process file: column '{}' is required", column)
            }
            DashboardError::OptionalColumnAbsent { column } => {
                format!("Skipped: the dataset has no '{}' column", column)
            }
            DashboardError::InsufficientData {
                operation,
                required,
                actual,
            } => {
                format!(
                    "Not enough data for a meaningful {} (needs more than {}, found {})",
                    operation, required, actual
                )
            }
            DashboardError::Clipboard(msg) => format!("Clipboard error: {}", msg),
            DashboardError::Json(e) => format!("JSON error: {}", e),
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            DashboardError::FileIo(_) => "File Error",
            DashboardError::Polars(_) => "Data Error",
            DashboardError::Config(_) => "Configuration Error",
            DashboardError::UnsupportedFormat { .. } => "Unsupported Format",
            DashboardError::MissingRequiredColumn { .. } => "Missing Column",
            DashboardError::OptionalColumnAbsent { .. } => "Column Not Available",
            DashboardError::InsufficientData { .. } => "Insufficient Data",
            DashboardError::Clipboard(_) => "Clipboard Error",
            DashboardError::Json(_) => "JSON Error",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DashboardError::OptionalColumnAbsent { .. } => Severity::Info,
            DashboardError::InsufficientData { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DashboardError::MissingRequiredColumn {
            column: "job_posted_date".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Cannot process file: column 'job_posted_date' is required"
        );
        assert_eq!(err.title(), "Missing Column");

        let err = DashboardError::InsufficientData {
            operation: "weekday-month heatmap".to_string(),
            required: 5,
            actual: 3,
        };
        assert_eq!(
            err.user_message(),
            "Not enough data for a meaningful weekday-month heatmap (needs more than 5, found 3)"
        );
    }

    #[test]
    fn test_severity() {
        let absent = DashboardError::OptionalColumnAbsent {
            column: "seniority_level".to_string(),
        };
        assert_eq!(absent.severity(), Severity::Info);

        let sparse = DashboardError::InsufficientData {
            operation: "trend".to_string(),
            required: 0,
            actual: 0,
        };
        assert_eq!(sparse.severity(), Severity::Warning);

        let missing = DashboardError::MissingRequiredColumn {
            column: "job_posted_date".to_string(),
        };
        assert_eq!(missing.severity(), Severity::Error);
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::FileIo(_)));
    }
}
