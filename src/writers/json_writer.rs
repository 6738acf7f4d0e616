use crate::analyzers::RentalReport;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Serializes a [`RentalReport`] for a browser front end or other consumer.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write<W: Write>(&self, report: &RentalReport, mut writer: W) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, report)?;
        } else {
            serde_json::to_writer(&mut writer, report)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_path(&self, report: &RentalReport, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        self.write(report, BufWriter::new(file))?;
        info!("Wrote JSON report to {}", path.display());
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::RentalAnalyzer;
    use crate::models::{HourlyRecord, RentalDataset};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_report() -> RentalReport {
        let dataset = RentalDataset::new(vec![
            HourlyRecord::new(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(), 0, 1, 1, 10),
            HourlyRecord::new(NaiveDate::from_ymd_opt(2011, 2, 1).unwrap(), 0, 2, 3, 20),
        ]);
        RentalAnalyzer::new().analyze_all(&dataset).unwrap()
    }

    #[test]
    fn test_json_shape() -> Result<()> {
        let mut buffer = Vec::new();
        JsonWriter::new()
            .with_pretty(false)
            .write(&sample_report(), &mut buffer)?;

        let value: serde_json::Value = serde_json::from_slice(&buffer)?;
        assert_eq!(value["has_data"], true);
        assert_eq!(value["range"]["start"], "2011-01-01");
        assert_eq!(value["metrics"]["total_people"], 30);
        assert_eq!(value["monthly"][1]["month"], "2011-02");
        assert_eq!(value["weather"][1]["label"], "Light");
        assert_eq!(value["season_changes"][1]["season_name"], "Summer");
        assert_eq!(value["missing_weather_categories"][0], "Cloudy");

        Ok(())
    }

    #[test]
    fn test_write_to_nested_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("out").join("report.json");

        JsonWriter::new().write_to_path(&sample_report(), &path)?;

        let content = std::fs::read_to_string(&path)?;
        assert!(content.contains("\"total_people\": 30"));

        Ok(())
    }
}
