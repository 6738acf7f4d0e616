use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observed hour of rentals.
///
/// Codes and counts are kept as read from the input; out-of-range values
/// are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub season: u8,
    pub weather: u8,
    pub count: i64,
}

impl HourlyRecord {
    pub fn new(date: NaiveDate, hour: u8, season: u8, weather: u8, count: i64) -> Self {
        Self {
            date,
            hour,
            season,
            weather,
            count,
        }
    }
}
