//! Integration tests for vigil

use vigil::{
    generate_anomaly_summary, CellValue, DetectionMethod, DriftDetector, DriftError, FindingSet,
    KpiStatistics, RawTable, Severity,
};

fn daily(columns: &[&str], rows: &[Vec<f64>]) -> RawTable {
    let mut raw = RawTable::new(std::iter::once("date").chain(columns.iter().copied()));
    for (i, values) in rows.iter().enumerate() {
        let mut row = vec![CellValue::from(format!("2024-03-{:02}", i + 1))];
        row.extend(values.iter().map(|&v| CellValue::from(v)));
        raw.push_row(row).unwrap();
    }
    raw
}

fn spike_series(n: usize, at: usize, base: f64, spike: f64) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| vec![if i == at { spike } else { base }])
        .collect()
}

#[test]
fn test_single_spike_zscore() {
    let raw = daily(&["orders"], &spike_series(30, 17, 100.0, 500.0));
    let engine = DriftDetector::new(&raw, "date").unwrap();

    let findings = engine.detect_zscore_outliers(3.0).unwrap();
    assert_eq!(findings.total(), 1);
    let record = &findings.get("orders")[0];
    assert_eq!(record.row, 17);
    assert_eq!(record.value, 500.0);
    assert_eq!(record.method, DetectionMethod::ZScore);
}

#[test]
fn test_constant_column_never_flagged() {
    let rows: Vec<Vec<f64>> = (0..25).map(|_| vec![42.0]).collect();
    let engine = DriftDetector::new(&daily(&["flat"], &rows), "date").unwrap();
    for threshold in [0.01, 0.5, 3.0] {
        assert!(engine.detect_zscore_outliers(threshold).unwrap().is_empty());
    }
}

#[test]
fn test_two_columns_two_anomalies_low_severity() {
    let rows: Vec<Vec<f64>> = (0..30)
        .map(|i| {
            vec![
                if i == 5 { 900.0 } else { 100.0 },
                if i == 20 { 10.0 } else { 250.0 },
            ]
        })
        .collect();
    let engine = DriftDetector::new(&daily(&["revenue", "sessions"], &rows), "date").unwrap();

    let set = FindingSet::new().with(engine.detect_zscore_outliers(3.0).unwrap());
    let summary = generate_anomaly_summary(&set);

    assert_eq!(summary.total_anomalies, 2);
    assert_eq!(summary.severity, Severity::Low);
    assert_eq!(summary.method_count(DetectionMethod::ZScore), 2);
    assert_eq!(summary.by_method.len(), 1);
    assert_eq!(summary.affected_kpis, vec!["revenue", "sessions"]);
}

#[test]
fn test_rolling_deviation_flags_local_jump() {
    let rows: Vec<Vec<f64>> = (0..21)
        .map(|i| vec![if i == 10 { 140.0 } else { 100.0 + (i % 2) as f64 }])
        .collect();
    let engine = DriftDetector::new(&daily(&["latency"], &rows), "date").unwrap();

    let findings = engine.detect_rolling_deviation(7, 0.25).unwrap();
    let records = findings.get("latency");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].row, 10);
    assert_eq!(records[0].reference, 101.0);
    assert_eq!(records[0].score, 38.61);
}

#[test]
fn test_rolling_deviation_never_flags_edges() {
    let mut rows = spike_series(20, 0, 100.0, 1000.0);
    rows[19] = vec![1000.0];
    rows[1] = vec![1000.0];
    let engine = DriftDetector::new(&daily(&["v"], &rows), "date").unwrap();
    let findings = engine.detect_rolling_deviation(7, 0.25).unwrap();
    assert!(findings.records().all(|r| r.row >= 3 && r.row < 17));
}

#[test]
fn test_rerun_replaces_findings() {
    let raw = daily(&["orders"], &spike_series(30, 3, 100.0, 500.0));
    let engine = DriftDetector::new(&raw, "date").unwrap();

    let mut set = FindingSet::new();
    set.record(engine.detect_zscore_outliers(3.0).unwrap());
    set.record(engine.detect_zscore_outliers(3.0).unwrap());
    assert_eq!(generate_anomaly_summary(&set).total_anomalies, 1);

    let previous = set.record(engine.detect_zscore_outliers(50.0).unwrap());
    assert_eq!(previous.map(|f| f.total()), Some(1));
    assert_eq!(generate_anomaly_summary(&set).total_anomalies, 0);
}

#[test]
fn test_unsorted_input_is_sorted_by_date() {
    let mut raw = RawTable::new(["date", "v"]);
    for (date, v) in [("2024-01-03", 3.0), ("2024-01-01", 1.0), ("2024-01-02", 2.0)] {
        raw.push_row(vec![date.into(), v.into()]).unwrap();
    }
    let engine = DriftDetector::new(&raw, "date").unwrap();
    assert_eq!(
        engine.table().column("v").unwrap().values,
        vec![Some(1.0), Some(2.0), Some(3.0)]
    );
}

#[test]
fn test_malformed_timestamp_fails_construction() {
    let mut raw = RawTable::new(["date", "v"]);
    raw.push_row(vec!["2024-01-01".into(), 1.0.into()]).unwrap();
    raw.push_row(vec!["31st of never".into(), 2.0.into()]).unwrap();
    let err = DriftDetector::new(&raw, "date").unwrap_err();
    assert!(matches!(err, DriftError::DataFormat { .. }));
}

#[test]
fn test_missing_timestamp_column_still_detects() {
    let mut raw = RawTable::new(["v"]);
    for i in 0..30 {
        let v = if i == 4 { 500.0 } else { 100.0 };
        raw.push_row(vec![CellValue::from(v)]).unwrap();
    }
    let engine = DriftDetector::new(&raw, "date").unwrap();
    let findings = engine.detect_zscore_outliers(3.0).unwrap();
    assert_eq!(findings.total(), 1);
    assert_eq!(findings.get("v")[0].timestamp, None);
}

#[test]
fn test_text_columns_excluded_from_detection() {
    let mut raw = RawTable::new(["date", "region", "sales"]);
    for i in 0..10 {
        raw.push_row(vec![
            format!("2024-01-{:02}", i + 1).into(),
            "emea".into(),
            (10.0 * i as f64).into(),
        ])
        .unwrap();
    }
    let engine = DriftDetector::new(&raw, "date").unwrap();
    assert_eq!(engine.numeric_columns(), vec!["sales"]);
    assert_eq!(
        engine.seasonal_analysis("region", 2).unwrap_err(),
        DriftError::UnknownColumn("region".to_string())
    );
}

#[test]
fn test_kpi_statistics_table() {
    let rows: Vec<Vec<f64>> = vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]];
    let engine = DriftDetector::new(&daily(&["a", "b"], &rows), "date").unwrap();

    let stats = engine.get_kpi_statistics();
    assert_eq!(KpiStatistics::HEADERS, ["KPI", "Mean", "Std Dev", "Min", "Max", "Count"]);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[1].column, "b");
    assert_eq!(stats[1].mean, Some(20.0));
    assert_eq!(stats[1].std_dev, Some(10.0));
    assert_eq!(stats[1].min, Some(10.0));
    assert_eq!(stats[1].max, Some(30.0));
    assert_eq!(stats[1].count, 3);
}
