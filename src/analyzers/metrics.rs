use crate::models::DailySummary;
use serde::Serialize;

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportMetrics {
    pub total_people: i64,
    pub total_hours: u64,
    /// Rounded to the nearest integer; `None` when no hours were observed.
    pub average_people_per_hour: Option<i64>,
}

impl ReportMetrics {
    pub fn from_daily(daily: &[DailySummary]) -> Self {
        let total_people: i64 = daily.iter().map(|d| d.people_count).sum();
        let total_hours: u64 = daily.iter().map(|d| d.hours_observed).sum();

        let average_people_per_hour = if total_hours == 0 {
            None
        } else {
            Some((total_people as f64 / total_hours as f64).round() as i64)
        };

        Self {
            total_people,
            total_hours,
            average_people_per_hour,
        }
    }

    pub fn has_data(&self) -> bool {
        self.total_hours > 0
    }
}
