use crate::models::{DateRange, HourlyRecord, RentalDataset};
use tracing::{debug, warn};

/// Rows of the dataset whose date falls inside a [`DateRange`], in their
/// original order. Borrows from the dataset; rebuilt on every new range.
#[derive(Debug, Clone)]
pub struct FilteredTable<'a> {
    range: DateRange,
    records: Vec<&'a HourlyRecord>,
}

impl<'a> FilteredTable<'a> {
    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn records(&self) -> &[&'a HourlyRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a HourlyRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'t, 'a> IntoIterator for &'t FilteredTable<'a> {
    type Item = &'a HourlyRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'t, &'a HourlyRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().copied()
    }
}

/// Select rows with `range.start <= date <= range.end`. An inverted range
/// yields an empty table, not an error.
pub fn filter_by_range(dataset: &RentalDataset, range: DateRange) -> FilteredTable<'_> {
    if range.is_inverted() {
        warn!("Inverted date range {}; selection is empty", range);
    }

    let records: Vec<&HourlyRecord> = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.date))
        .collect();

    debug!(
        "Range {} selected {} of {} records",
        range,
        records.len(),
        dataset.len()
    );

    FilteredTable { range, records }
}
