use crate::models::{HourlyRecord, WeatherSituation, WeatherSummary};
use std::collections::BTreeMap;

/// Hours, people and mean people per hour for each weather code present.
///
/// Labels come from an explicit code lookup, so any subset of codes is
/// labelled correctly. Codes absent from the input produce no row; see
/// [`missing_weather_categories`]. Unknown codes keep their own row with
/// the `Unknown` label.
pub fn aggregate_weather<'a, I>(records: I) -> Vec<WeatherSummary>
where
    I: IntoIterator<Item = &'a HourlyRecord>,
{
    let mut by_code: BTreeMap<u8, (u64, i64)> = BTreeMap::new();

    for record in records {
        let entry = by_code.entry(record.weather).or_default();
        entry.0 += 1;
        entry.1 += record.count;
    }

    by_code
        .into_iter()
        .map(|(code, (hours, people))| {
            WeatherSummary::new(code, WeatherSituation::label_for_code(code), hours, people)
        })
        .collect()
}

/// Known categories with no row in `summaries`.
pub fn missing_weather_categories(summaries: &[WeatherSummary]) -> Vec<WeatherSituation> {
    WeatherSituation::ALL
        .into_iter()
        .filter(|w| !summaries.iter().any(|s| s.code == w.code()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record(weather: u8, count: i64) -> HourlyRecord {
        HourlyRecord::new(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(), 0, 1, weather, count)
    }

    #[test]
    fn test_weather_totals_and_mean() {
        let records = vec![
            record(1, 10),
            record(1, 20),
            record(2, 9),
            record(3, 1),
            record(4, 2),
            record(1, 30),
        ];

        let weather = aggregate_weather(&records);
        assert_eq!(weather.len(), 4);

        let clear = &weather[0];
        assert_eq!(clear.label, "Clear");
        assert_eq!(clear.hours_observed, 3);
        assert_eq!(clear.people_count, 60);
        assert!((clear.mean_per_hour.unwrap() - 20.0).abs() < f64::EPSILON);

        let labels: Vec<&str> = weather.iter().map(|w| w.label).collect();
        assert_eq!(labels, vec!["Clear", "Cloudy", "Light", "Heavy"]);
    }

    #[test]
    fn test_labels_follow_codes_when_categories_absent() {
        // Only Cloudy and Heavy: positional labelling would call them Clear and Cloudy
        let records = vec![record(4, 3), record(2, 8), record(2, 4)];

        let weather = aggregate_weather(&records);
        let rows: Vec<(u8, &str, u64)> = weather
            .iter()
            .map(|w| (w.code, w.label, w.hours_observed))
            .collect();

        assert_eq!(rows, vec![(2, "Cloudy", 2), (4, "Heavy", 1)]);
        assert_eq!(
            missing_weather_categories(&weather),
            vec![WeatherSituation::Clear, WeatherSituation::Light]
        );
    }

    #[test]
    fn test_mean_matches_people_over_hours() {
        let records = vec![record(3, 7), record(3, 8), record(3, 10)];

        let weather = aggregate_weather(&records);
        let light = &weather[0];
        let expected = light.people_count as f64 / light.hours_observed as f64;
        assert!((light.mean_per_hour.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_code_keeps_own_row() {
        let records = vec![record(1, 5), record(9, 2)];

        let weather = aggregate_weather(&records);
        assert_eq!(weather[1].code, 9);
        assert_eq!(weather[1].label, "Unknown");
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<HourlyRecord> = Vec::new();
        let weather = aggregate_weather(&records);

        assert!(weather.is_empty());
        assert_eq!(missing_weather_categories(&weather).len(), 4);
    }
}
