//! Merges per-method findings into a single severity-ranked summary.

use std::collections::BTreeMap;

use vigil_spi::{AnomalyDetail, AnomalySummary, FindingSet, MethodFindings, Severity};

/// Summarize the findings currently held in a [`FindingSet`].
pub fn generate_anomaly_summary(findings: &FindingSet) -> AnomalySummary {
    summarize(findings.iter())
}

/// Summarize any sequence of method runs.
///
/// Every run contributes to `by_method`, even with zero records. Details
/// follow run order, then column order, then row order.
pub fn summarize<'a>(runs: impl IntoIterator<Item = &'a MethodFindings>) -> AnomalySummary {
    let mut total_anomalies = 0;
    let mut affected_kpis: Vec<String> = Vec::new();
    let mut by_method = BTreeMap::new();
    let mut details = Vec::new();

    for run in runs {
        let count = run.total();
        *by_method.entry(run.method).or_insert(0) += count;
        total_anomalies += count;

        for column in &run.columns {
            if !column.records.is_empty() && !affected_kpis.contains(&column.column) {
                affected_kpis.push(column.column.clone());
            }
            details.extend(column.records.iter().map(|record| AnomalyDetail {
                date: record.timestamp,
                kpi: record.column.clone(),
                method: record.method,
                value: record.value,
                score: record.score,
            }));
        }
    }

    AnomalySummary {
        total_anomalies,
        severity: Severity::from_count(total_anomalies),
        affected_kpis,
        by_method,
        details,
    }
}
