use crate::models::{HourlyRecord, Season, SeasonChange};
use crate::utils::dates::month_label;

/// Points where the season code differs from the previous row.
///
/// Rows are sorted by date (then hour) first, so caller order does not
/// matter. The earliest row always starts a change. Ties keep input order.
pub fn aggregate_season_changes<'a, I>(records: I) -> Vec<SeasonChange>
where
    I: IntoIterator<Item = &'a HourlyRecord>,
{
    let mut ordered: Vec<&HourlyRecord> = records.into_iter().collect();
    ordered.sort_by_key(|r| (r.date, r.hour));

    let mut previous_season: Option<u8> = None;
    let mut changes = Vec::new();

    for record in ordered {
        if previous_season != Some(record.season) {
            changes.push(SeasonChange {
                month_label: month_label(record.date),
                date: record.date,
                season_code: record.season,
                season_name: Season::name_for_code(record.season),
            });
            previous_season = Some(record.season);
        }
    }

    changes
}
