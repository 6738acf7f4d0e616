use chrono::{NaiveDate, NaiveDateTime};

use crate::utils::constants::{DATETIME_FORMATS, DATE_ONLY_FORMATS, MONTH_LABEL_FORMAT};

/// Parse a date cell, dropping any time-of-day component.
pub fn parse_date_cell(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_ONLY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// `YYYY-MM` label for the month containing `date`.
pub fn month_label(date: NaiveDate) -> String {
    date.format(MONTH_LABEL_FORMAT).to_string()
}
