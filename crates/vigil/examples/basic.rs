//! Basic example demonstrating KPI drift detection
//!
//! Run with: cargo run --example basic -p vigil
//! Set RUST_LOG=debug to see engine tracing.

use chrono::{Days, NaiveDate};
use tracing_subscriber::EnvFilter;
use vigil::{
    generate_anomaly_summary, CellValue, DriftDetector, EngineConfig, KpiStatistics, RawTable,
};

fn sample_data() -> Result<RawTable, Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 9, 1).ok_or("invalid start date")?;
    let mut raw = RawTable::new(["date", "revenue", "active_users", "conversion_rate"]);
    for day in 0..42u32 {
        let date = start
            .checked_add_days(Days::new(day as u64))
            .ok_or("date out of range")?;
        let weekday = (day % 7) as f64;
        let mut revenue = 12_000.0 + 40.0 * day as f64 + 600.0 * (weekday - 3.0).abs();
        let mut users = 3_400.0 + 15.0 * day as f64;
        let conversion = 0.031 + 0.001 * (weekday - 3.0);
        if day == 18 {
            revenue *= 2.4;
        }
        if day == 33 {
            users *= 0.55;
        }
        raw.push_row(vec![
            CellValue::from(date.format("%Y-%m-%d").to_string()),
            CellValue::from(revenue),
            CellValue::from(users),
            CellValue::from(conversion),
        ])?;
    }
    Ok(raw)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== vigil Basic Example ===\n");

    let config = EngineConfig::builder()
        .zscore_threshold(3.0)
        .rolling_window(7)
        .deviation_threshold(0.25)
        .build()?;
    let engine = DriftDetector::with_config(&sample_data()?, config)?;
    println!("Monitoring KPIs: {}\n", engine.numeric_columns().join(", "));

    let findings = engine.run_configured()?;
    for run in findings.iter() {
        println!("{}: {} findings", run.method.label(), run.total());
    }

    let summary = generate_anomaly_summary(&findings);
    println!("\nTotal anomalies: {}", summary.total_anomalies);
    println!("Severity: {}", summary.severity);
    println!("Affected KPIs: {}", summary.affected_kpis.join(", "));
    for detail in &summary.details {
        let date = detail
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "   {}  {:<16} {:<18} value={:.2} score={:.2}",
            date,
            detail.kpi,
            detail.method.label(),
            detail.value,
            detail.score
        );
    }

    println!("\n{}", KpiStatistics::HEADERS.join(" | "));
    for stats in engine.get_kpi_statistics() {
        println!(
            "{} | {:.3} | {:.3} | {:.3} | {:.3} | {}",
            stats.column,
            stats.mean.unwrap_or(f64::NAN),
            stats.std_dev.unwrap_or(f64::NAN),
            stats.min.unwrap_or(f64::NAN),
            stats.max.unwrap_or(f64::NAN),
            stats.count
        );
    }

    match engine.seasonal_analysis_default("revenue")?.components() {
        Some(c) => println!(
            "\nSeasonal pattern (period {}): {:?}",
            c.period,
            c.seasonal
                .iter()
                .take(c.period)
                .flatten()
                .map(|s| format!("{:.1}", s))
                .collect::<Vec<_>>()
        ),
        None => println!("\nSeasonal analysis unavailable"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
