//! Drift detection error types.

use thiserror::Error;

/// Drift detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DriftError {
    /// A timestamp cell could not be parsed.
    #[error("Invalid timestamp in column '{column}': '{value}' ({reason})")]
    DataFormat {
        column: String,
        value: String,
        reason: String,
    },

    /// The column is not one of the table's numeric columns.
    #[error("Column '{0}' not found in numeric columns")]
    UnknownColumn(String),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A raw row does not match the header width.
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A table column does not cover every row.
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Present timestamps must be ascending, with missing ones last.
    #[error("Timestamps in column '{column}' are out of order at row {row}")]
    UnsortedTimestamps { column: String, row: usize },

    #[error("Decomposition failed: {0}")]
    DecompositionFailed(String),
}

impl DriftError {
    /// Shorthand for an [`DriftError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for drift detection operations.
pub type Result<T> = std::result::Result<T, DriftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_format_display() {
        let error = DriftError::DataFormat {
            column: "date".to_string(),
            value: "2024-13-45".to_string(),
            reason: "unrecognized date format".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid timestamp in column 'date': '2024-13-45' (unrecognized date format)"
        );
    }

    #[test]
    fn test_unknown_column_display() {
        let error = DriftError::UnknownColumn("revenue".to_string());
        assert_eq!(
            error.to_string(),
            "Column 'revenue' not found in numeric columns"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = DriftError::invalid_parameter("threshold", "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter: threshold - must be positive"
        );
    }

    #[test]
    fn test_row_shape_display() {
        let error = DriftError::RowShape {
            row: 3,
            expected: 4,
            actual: 2,
        };
        assert_eq!(error.to_string(), "Row 3 has 2 cells, expected 4");
    }

    #[test]
    fn test_column_length_display() {
        let error = DriftError::ColumnLength {
            column: "sales".to_string(),
            expected: 3,
            actual: 1,
        };
        assert_eq!(error.to_string(), "Column 'sales' has 1 values, expected 3");
    }

    #[test]
    fn test_unsorted_timestamps_display() {
        let error = DriftError::UnsortedTimestamps {
            column: "date".to_string(),
            row: 2,
        };
        assert_eq!(
            error.to_string(),
            "Timestamps in column 'date' are out of order at row 2"
        );
    }

    #[test]
    fn test_decomposition_failed_display() {
        let error = DriftError::DecompositionFailed("non-finite trend".to_string());
        assert_eq!(error.to_string(), "Decomposition failed: non-finite trend");
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(DriftError::UnknownColumn("x".to_string()));
        assert!(matches!(result.unwrap_err(), DriftError::UnknownColumn(_)));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(DriftError::DecompositionFailed("test".to_string()));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DriftError>();
    }
}
