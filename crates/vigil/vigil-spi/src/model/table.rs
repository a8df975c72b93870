//! Tabular input and the normalized time series table.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{DriftError, Result};

/// A single cell of a raw table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Numeric value of the cell, treating NaN as missing.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    /// Whether the cell carries no value.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Number(v) => v.is_nan(),
            CellValue::Text(_) => false,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Missing)
    }
}

/// Source-agnostic tabular data as handed over by a loader.
///
/// Rows are kept in source order; every row has exactly one cell per header
/// column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Create an empty table with the given header.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, checking it against the header width.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(DriftError::RowShape {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builder-style variant of [`RawTable::push_row`].
    pub fn with_row(mut self, row: Vec<CellValue>) -> Result<Self> {
        self.push_row(row)?;
        Ok(self)
    }

    /// Position of a header column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A numeric KPI column; `None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl NumericColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Non-missing values in row order.
    pub fn present(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }

    /// Count of non-missing values.
    pub fn count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Normalized time series: rows sorted by timestamp, numeric columns typed
/// once at construction. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesTable {
    timestamp_column: String,
    timestamps: Option<Vec<Option<NaiveDateTime>>>,
    columns: Vec<NumericColumn>,
    len: usize,
}

impl TimeSeriesTable {
    /// Assemble a table from already-aligned parts.
    ///
    /// `timestamps` is `None` when the source had no timestamp column.
    /// Present timestamps must be ascending and missing ones must come last.
    pub fn new(
        timestamp_column: impl Into<String>,
        timestamps: Option<Vec<Option<NaiveDateTime>>>,
        columns: Vec<NumericColumn>,
        len: usize,
    ) -> Result<Self> {
        let timestamp_column = timestamp_column.into();
        if let Some(ts) = &timestamps {
            if ts.len() != len {
                return Err(DriftError::ColumnLength {
                    column: timestamp_column,
                    expected: len,
                    actual: ts.len(),
                });
            }
            // Missing timestamps sort last.
            let out_of_order = ts.windows(2).position(|pair| match (pair[0], pair[1]) {
                (Some(a), Some(b)) => a > b,
                (None, Some(_)) => true,
                _ => false,
            });
            if let Some(row) = out_of_order {
                return Err(DriftError::UnsortedTimestamps {
                    column: timestamp_column,
                    row: row + 1,
                });
            }
        }
        if let Some(column) = columns.iter().find(|c| c.values.len() != len) {
            return Err(DriftError::ColumnLength {
                column: column.name.clone(),
                expected: len,
                actual: column.values.len(),
            });
        }
        Ok(Self {
            timestamp_column,
            timestamps,
            columns,
            len,
        })
    }

    pub fn timestamp_column(&self) -> &str {
        &self.timestamp_column
    }

    /// Whether the source carried the timestamp column.
    pub fn has_timestamps(&self) -> bool {
        self.timestamps.is_some()
    }

    /// Timestamp of a row, if the table has one for it.
    pub fn timestamp(&self, row: usize) -> Option<NaiveDateTime> {
        self.timestamps
            .as_ref()
            .and_then(|ts| ts.get(row).copied().flatten())
    }

    pub fn columns(&self) -> &[NumericColumn] {
        &self.columns
    }

    /// Look up a numeric column by name.
    pub fn column(&self, name: &str) -> Option<&NumericColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of the numeric columns in header order.
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
