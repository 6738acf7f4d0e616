use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{ReportError, Result};
use crate::models::HourlyRecord;

/// Inclusive date range, compared at day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// An inverted range selects nothing.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Pull both ends into `bounds`, as the date picker does. Ordering is
    /// left alone so an inverted pick stays inverted.
    pub fn clamp_to(&self, bounds: DateRange) -> Self {
        Self {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// The loaded input table. Read-only after load; passed explicitly into
/// every filter and aggregation call.
#[derive(Debug, Clone, Default)]
pub struct RentalDataset {
    records: Vec<HourlyRecord>,
}

impl RentalDataset {
    pub fn new(records: Vec<HourlyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[HourlyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest date present.
    pub fn date_bounds(&self) -> Result<DateRange> {
        let mut dates = self.records.iter().map(|r| r.date);
        let first = dates.next().ok_or(ReportError::EmptyDataset)?;

        let (min, max) = dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        });

        Ok(DateRange::new(min, max))
    }

    pub fn distinct_days(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.date)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Weather codes present anywhere in the dataset, ascending.
    pub fn weather_codes(&self) -> Vec<u8> {
        self.records
            .iter()
            .map(|r| r.weather)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
