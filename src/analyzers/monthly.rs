use crate::models::{HourlyRecord, MonthlySummary};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Total count per `YYYY-MM`, ascending by month.
pub fn aggregate_monthly<'a, I>(records: I) -> Vec<MonthlySummary>
where
    I: IntoIterator<Item = &'a HourlyRecord>,
{
    let mut by_month: BTreeMap<(i32, u32), i64> = BTreeMap::new();

    for record in records {
        *by_month
            .entry((record.date.year(), record.date.month()))
            .or_default() += record.count;
    }

    by_month
        .into_iter()
        .map(|((year, month), total_count)| MonthlySummary {
            month: format!("{:04}-{:02}", year, month),
            total_count,
        })
        .collect()
}
