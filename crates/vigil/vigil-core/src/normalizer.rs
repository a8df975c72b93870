//! Dataset normalization: timestamp parsing, row sorting and numeric column typing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{debug, info};
use vigil_spi::{CellValue, DriftError, NumericColumn, RawTable, Result, TimeSeriesTable};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a timestamp cell. Missing and blank cells yield `Ok(None)`.
pub fn parse_timestamp(column: &str, cell: &CellValue) -> Result<Option<NaiveDateTime>> {
    let invalid = |value: String, reason: &str| DriftError::DataFormat {
        column: column.to_string(),
        value,
        reason: reason.to_string(),
    };

    match cell {
        CellValue::Missing => Ok(None),
        CellValue::Number(v) if v.is_nan() => Ok(None),
        CellValue::Number(v) => {
            if !v.is_finite() {
                return Err(invalid(v.to_string(), "not a finite epoch value"));
            }
            let secs = v.floor();
            let nanos = ((v - secs) * 1e9).round().min(999_999_999.0) as u32;
            DateTime::from_timestamp(secs as i64, nanos)
                .map(|dt| Some(dt.naive_utc()))
                .ok_or_else(|| invalid(v.to_string(), "epoch seconds out of range"))
        }
        CellValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                return Ok(Some(dt.naive_utc()));
            }
            for format in DATETIME_FORMATS {
                if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
                    return Ok(Some(dt));
                }
            }
            for format in DATE_FORMATS {
                if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                    return Ok(Some(date.and_time(chrono::NaiveTime::MIN)));
                }
            }
            Err(invalid(text.to_string(), "unrecognized date/time format"))
        }
    }
}

/// Normalize a raw table into a [`TimeSeriesTable`].
///
/// When `timestamp_column` is present its cells are parsed and rows are
/// stably sorted ascending, missing timestamps last. When it is absent rows
/// keep source order. A column is numeric only if every cell is a number or
/// missing; the timestamp column never is.
pub fn normalize(raw: &RawTable, timestamp_column: &str) -> Result<TimeSeriesTable> {
    for (row, cells) in raw.rows.iter().enumerate() {
        if cells.len() != raw.columns.len() {
            return Err(DriftError::RowShape {
                row,
                expected: raw.columns.len(),
                actual: cells.len(),
            });
        }
    }

    let ts_index = raw.column_index(timestamp_column);
    let mut order: Vec<usize> = (0..raw.len()).collect();

    let timestamps = match ts_index {
        Some(idx) => {
            let parsed = raw
                .rows
                .iter()
                .map(|cells| parse_timestamp(timestamp_column, &cells[idx]))
                .collect::<Result<Vec<_>>>()?;
            order.sort_by(|&a, &b| match (parsed[a], parsed[b]) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });
            Some(order.iter().map(|&i| parsed[i]).collect::<Vec<_>>())
        }
        None => {
            debug!(
                timestamp_column,
                "timestamp column absent; keeping source row order"
            );
            None
        }
    };

    let mut columns = Vec::new();
    let mut excluded = Vec::new();
    for (idx, name) in raw.columns.iter().enumerate() {
        if Some(idx) == ts_index {
            continue;
        }
        let numeric = raw
            .rows
            .iter()
            .all(|cells| matches!(cells[idx], CellValue::Number(_) | CellValue::Missing));
        if !numeric {
            excluded.push(name.as_str());
            continue;
        }
        let values = order.iter().map(|&i| raw.rows[i][idx].as_number()).collect();
        columns.push(NumericColumn::new(name.clone(), values));
    }

    info!(
        rows = raw.len(),
        numeric_columns = columns.len(),
        excluded = ?excluded,
        "normalized KPI table"
    );

    TimeSeriesTable::new(timestamp_column, timestamps, columns, raw.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(text: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .unwrap()
            .and_time(chrono::NaiveTime::MIN)
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Some(ts("2024-03-05"));
        for text in ["2024-03-05", "2024/03/05", "03/05/2024", "2024-03-05 00:00:00"] {
            assert_eq!(
                parse_timestamp("date", &CellValue::from(text)).unwrap(),
                expected,
                "{text}"
            );
        }
        assert_eq!(
            parse_timestamp("date", &CellValue::from("2024-03-05T01:00:00+01:00")).unwrap(),
            expected
        );
        assert_eq!(
            parse_timestamp("date", &CellValue::Number(1_709_596_800.0)).unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_timestamp_missing_and_blank() {
        assert_eq!(parse_timestamp("date", &CellValue::Missing).unwrap(), None);
        assert_eq!(parse_timestamp("date", &CellValue::from("  ")).unwrap(), None);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("date", &CellValue::from("yesterday")).unwrap_err();
        assert!(matches!(err, DriftError::DataFormat { ref column, .. } if column == "date"));
    }

    #[test]
    fn test_normalize_sorts_and_types_columns() {
        let raw = RawTable::new(["date", "sales", "region", "visits"])
            .with_row(vec!["2024-01-03".into(), 3.0.into(), "eu".into(), 30.0.into()])
            .and_then(|t| {
                t.with_row(vec!["2024-01-01".into(), 1.0.into(), "us".into(), CellValue::Missing])
            })
            .and_then(|t| {
                t.with_row(vec!["2024-01-02".into(), 2.0.into(), "eu".into(), 20.0.into()])
            })
            .unwrap();

        let table = normalize(&raw, "date").unwrap();
        assert_eq!(table.numeric_column_names(), vec!["sales", "visits"]);
        assert_eq!(
            table.column("sales").unwrap().values,
            vec![Some(1.0), Some(2.0), Some(3.0)]
        );
        assert_eq!(
            table.column("visits").unwrap().values,
            vec![None, Some(20.0), Some(30.0)]
        );
        assert_eq!(table.timestamp(0), Some(ts("2024-01-01")));
    }

    #[test]
    fn test_normalize_excludes_mixed_columns() {
        let raw = RawTable::new(["date", "score"])
            .with_row(vec!["2024-01-01".into(), 1.0.into()])
            .and_then(|t| t.with_row(vec!["2024-01-02".into(), "n/a".into()]))
            .unwrap();
        let table = normalize(&raw, "date").unwrap();
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_normalize_missing_timestamps_sort_last() {
        let raw = RawTable::new(["date", "v"])
            .with_row(vec![CellValue::Missing, 9.0.into()])
            .and_then(|t| t.with_row(vec!["2024-01-02".into(), 2.0.into()]))
            .and_then(|t| t.with_row(vec!["2024-01-01".into(), 1.0.into()]))
            .unwrap();
        let table = normalize(&raw, "date").unwrap();
        assert_eq!(
            table.column("v").unwrap().values,
            vec![Some(1.0), Some(2.0), Some(9.0)]
        );
        assert_eq!(table.timestamp(2), None);
    }

    #[test]
    fn test_normalize_without_timestamp_column_keeps_order() {
        let raw = RawTable::new(["v"])
            .with_row(vec![3.0.into()])
            .and_then(|t| t.with_row(vec![1.0.into()]))
            .unwrap();
        let table = normalize(&raw, "date").unwrap();
        assert!(!table.has_timestamps());
        assert_eq!(table.column("v").unwrap().values, vec![Some(3.0), Some(1.0)]);
    }

    #[test]
    fn test_normalize_fails_on_bad_timestamp() {
        let raw = RawTable::new(["date", "v"])
            .with_row(vec!["not a date".into(), 1.0.into()])
            .unwrap();
        assert!(matches!(
            normalize(&raw, "date"),
            Err(DriftError::DataFormat { .. })
        ));
    }
}
