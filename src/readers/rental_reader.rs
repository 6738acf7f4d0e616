use crate::error::{ReportError, Result};
use crate::models::{HourlyRecord, RentalDataset};
use crate::utils::constants::{
    COL_COUNT, COL_DATE, COL_HOUR, COL_SEASON, COL_WEATHER, DEFAULT_BUFFER_SIZE,
    PROGRESS_INTERVAL, REQUIRED_COLUMNS,
};
use crate::utils::dates::parse_date_cell;
use crate::utils::progress::ProgressReporter;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    hour: usize,
    season: usize,
    weather: usize,
    count: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();

        match (
            find(COL_DATE),
            find(COL_HOUR),
            find(COL_SEASON),
            find(COL_WEATHER),
            find(COL_COUNT),
        ) {
            (Some(date), Some(hour), Some(season), Some(weather), Some(count)) => Ok(Self {
                date,
                hour,
                season,
                weather,
                count,
            }),
            _ => Err(ReportError::MissingColumns { missing }),
        }
    }
}

/// Loads the hourly rentals file into a [`RentalDataset`].
pub struct RentalReader {
    delimiter: u8,
}

impl RentalReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read the dataset from a file path
    pub fn read_dataset(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<RentalDataset> {
        info!("Loading rentals from {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let dataset = self.read_from(reader, progress)?;

        info!("Loaded {} hourly records", dataset.len());
        Ok(dataset)
    }

    /// Read the dataset from any delimited source with a header row
    pub fn read_from<R: Read>(
        &self,
        source: R,
        progress: Option<&ProgressReporter>,
    ) -> Result<RentalDataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(source);

        let columns = ColumnIndex::from_headers(reader.headers()?)?;
        debug!("Resolved columns: {:?}", columns);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(self.parse_row(&row, &columns)?);

            if records.len() as u64 % PROGRESS_INTERVAL == 0 {
                if let Some(progress) = progress {
                    progress.set_message(&format!("Loaded {} records...", records.len()));
                }
            }
        }

        Ok(RentalDataset::new(records))
    }

    /// Parse one data row; codes and counts are not range-checked
    fn parse_row(&self, row: &StringRecord, columns: &ColumnIndex) -> Result<HourlyRecord> {
        let line = row.position().map_or(0, |p| p.line());

        let date_cell = field(row, columns.date, COL_DATE, line)?;
        let date = parse_date_cell(date_cell).ok_or_else(|| ReportError::MalformedRow {
            line,
            message: format!("Invalid date: '{}'", date_cell),
        })?;

        Ok(HourlyRecord::new(
            date,
            parse_number(row, columns.hour, COL_HOUR, line)?,
            parse_number(row, columns.season, COL_SEASON, line)?,
            parse_number(row, columns.weather, COL_WEATHER, line)?,
            parse_number(row, columns.count, COL_COUNT, line)?,
        ))
    }
}

impl Default for RentalReader {
    fn default() -> Self {
        Self::new()
    }
}

fn field<'r>(row: &'r StringRecord, index: usize, name: &str, line: u64) -> Result<&'r str> {
    row.get(index).ok_or_else(|| ReportError::MalformedRow {
        line,
        message: format!("Missing value for '{}'", name),
    })
}

fn parse_number<T: FromStr>(row: &StringRecord, index: usize, name: &str, line: u64) -> Result<T> {
    let value = field(row, index, name, line)?;
    value.parse::<T>().map_err(|_| ReportError::MalformedRow {
        line,
        message: format!("Invalid {}: '{}'", name, value),
    })
}
