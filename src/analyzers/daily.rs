use crate::models::{DailySummary, HourlyRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Hours observed and people counted per calendar date, ascending by date.
pub fn aggregate_daily<'a, I>(records: I) -> Vec<DailySummary>
where
    I: IntoIterator<Item = &'a HourlyRecord>,
{
    let mut by_date: BTreeMap<NaiveDate, (u64, i64)> = BTreeMap::new();

    for record in records {
        let entry = by_date.entry(record.date).or_default();
        entry.0 += 1;
        entry.1 += record.count;
    }

    by_date
        .into_iter()
        .map(|(date, (hours_observed, people_count))| DailySummary {
            date,
            hours_observed,
            people_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_totals() {
        let records = vec![
            HourlyRecord::new(date(2011, 1, 2), 0, 1, 1, 5),
            HourlyRecord::new(date(2011, 1, 1), 0, 1, 1, 10),
            HourlyRecord::new(date(2011, 1, 1), 1, 1, 2, 7),
        ];

        let daily = aggregate_daily(&records);

        assert_eq!(
            daily,
            vec![
                DailySummary {
                    date: date(2011, 1, 1),
                    hours_observed: 2,
                    people_count: 17,
                },
                DailySummary {
                    date: date(2011, 1, 2),
                    hours_observed: 1,
                    people_count: 5,
                },
            ]
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let mut records = vec![
            HourlyRecord::new(date(2011, 3, 1), 0, 1, 1, 1),
            HourlyRecord::new(date(2011, 1, 1), 0, 1, 1, 2),
            HourlyRecord::new(date(2011, 2, 1), 0, 1, 1, 3),
        ];
        let forward = aggregate_daily(&records);
        records.reverse();

        assert_eq!(aggregate_daily(&records), forward);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<HourlyRecord> = Vec::new();
        assert!(aggregate_daily(&records).is_empty());
    }
}
