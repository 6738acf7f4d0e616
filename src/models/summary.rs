use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub hours_observed: u64,
    pub people_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// `YYYY-MM`
    pub month: String,
    pub total_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub code: u8,
    pub label: &'static str,
    pub hours_observed: u64,
    pub people_count: i64,
    /// `None` when no hours were observed.
    pub mean_per_hour: Option<f64>,
}

impl WeatherSummary {
    pub fn new(code: u8, label: &'static str, hours_observed: u64, people_count: i64) -> Self {
        let mean_per_hour = if hours_observed == 0 {
            None
        } else {
            Some(people_count as f64 / hours_observed as f64)
        };

        Self {
            code,
            label,
            hours_observed,
            people_count,
            mean_per_hour,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonChange {
    pub month_label: String,
    pub date: NaiveDate,
    pub season_code: u8,
    pub season_name: &'static str,
}
