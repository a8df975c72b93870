//! Descriptive statistics per KPI column.

use vigil_spi::{KpiStatistics, NumericColumn, TimeSeriesTable};

use crate::series::{mean, sample_std_dev};

/// Statistics for a single column over its non-missing values.
pub fn column_statistics(column: &NumericColumn) -> KpiStatistics {
    let present = column.present();
    KpiStatistics {
        column: column.name.clone(),
        mean: mean(&present),
        std_dev: sample_std_dev(&present),
        min: present.iter().copied().reduce(f64::min),
        max: present.iter().copied().reduce(f64::max),
        count: present.len(),
    }
}

/// One row per numeric column, in table order.
pub fn kpi_statistics(table: &TimeSeriesTable) -> Vec<KpiStatistics> {
    table.columns().iter().map(column_statistics).collect()
}
