//! Outlier detector trait definition.

use crate::model::{
    ColumnFindings, DetectionMethod, DetectionParameters, MethodFindings, OutlierRecord,
    SeriesHit, TimeSeriesTable,
};

/// Per-column univariate outlier detector.
///
/// Implementations judge one series at a time; the provided [`detect`]
/// runs them over every numeric column of a table.
///
/// [`detect`]: OutlierDetector::detect
pub trait OutlierDetector: Send + Sync {
    /// Method tag stamped on every record.
    fn method(&self) -> DetectionMethod;

    /// Parameters this detector runs with.
    fn parameters(&self) -> DetectionParameters;

    /// Flagged points of one series, in row order. Missing values are never flagged.
    fn detect_series(&self, values: &[Option<f64>]) -> Vec<SeriesHit>;

    /// Run over every numeric column of the table.
    fn detect(&self, table: &TimeSeriesTable) -> MethodFindings {
        let method = self.method();
        let mut findings = MethodFindings::new(method, self.parameters());

        for column in table.columns() {
            let records: Vec<OutlierRecord> = self
                .detect_series(&column.values)
                .into_iter()
                .map(|hit| OutlierRecord {
                    timestamp: table.timestamp(hit.row),
                    row: hit.row,
                    column: column.name.clone(),
                    value: hit.value,
                    method,
                    score: hit.score,
                    reference: hit.reference,
                })
                .collect();

            if !records.is_empty() {
                findings.columns.push(ColumnFindings {
                    column: column.name.clone(),
                    records,
                });
            }
        }

        findings
    }
}
