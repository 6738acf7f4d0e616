use crate::analyzers::RentalReport;
use crate::error::Result;
use crate::utils::constants::DEFAULT_CHART_WIDTH;
use std::fmt::{self, Write};
use std::path::Path;
use tracing::info;

const BAR_CHAR: char = '#';
const NO_DATA: &str = "No data for the selected date range";

/// Terminal rendition of the dashboard: headline metrics, monthly chart
/// with season markers, and the weather breakdown.
pub struct TextRenderer {
    chart_width: usize,
    show_daily: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            chart_width: DEFAULT_CHART_WIDTH,
            show_daily: false,
        }
    }

    pub fn with_chart_width(mut self, chart_width: usize) -> Self {
        self.chart_width = chart_width.max(1);
        self
    }

    pub fn with_daily(mut self, show_daily: bool) -> Self {
        self.show_daily = show_daily;
        self
    }

    pub fn render(&self, report: &RentalReport) -> String {
        let mut out = String::new();
        // fmt::Write for String never fails
        let _ = self.render_to(report, &mut out);
        out
    }

    pub fn render_to<W: Write>(&self, report: &RentalReport, out: &mut W) -> fmt::Result {
        writeln!(out, "Bike Sharing Report")?;
        writeln!(out, "Date Range: {}", report.range)?;
        writeln!(out)?;

        if !report.has_data {
            return writeln!(out, "{}", NO_DATA);
        }

        self.render_metrics(report, out)?;
        self.render_monthly(report, out)?;
        self.render_weather(report, out)?;
        if self.show_daily {
            self.render_daily(report, out)?;
        }

        Ok(())
    }

    /// Render into `path`, creating missing parent directories.
    pub fn write_to_path(&self, report: &RentalReport, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, self.render(report))?;
        info!("Wrote text report to {}", path.display());
        Ok(())
    }

    fn render_metrics<W: Write>(&self, report: &RentalReport, out: &mut W) -> fmt::Result {
        let average = report
            .metrics
            .average_people_per_hour
            .map_or_else(|| "n/a".to_string(), |a| a.to_string());

        writeln!(out, "Number of Cycles")?;
        writeln!(out, "- People Count: {}", report.metrics.total_people)?;
        writeln!(out, "- Average People/Hours: {}", average)?;
        writeln!(out)
    }

    fn render_monthly<W: Write>(&self, report: &RentalReport, out: &mut W) -> fmt::Result {
        writeln!(out, "Monthly Rentals")?;

        let max = report.monthly.iter().map(|m| m.total_count).max().unwrap_or(0);
        let value_width = digits(max);

        for month in &report.monthly {
            let markers: Vec<&str> = report
                .season_changes
                .iter()
                .filter(|c| c.month_label == month.month)
                .map(|c| c.season_name)
                .collect();

            write!(
                out,
                "{} | {:<width$} {:>vw$}",
                month.month,
                self.bar(month.total_count as f64, max as f64),
                month.total_count,
                width = self.chart_width,
                vw = value_width
            )?;
            if !markers.is_empty() {
                write!(out, "  <- {}", markers.join(", "))?;
            }
            writeln!(out)?;
        }
        writeln!(out)
    }

    fn render_weather<W: Write>(&self, report: &RentalReport, out: &mut W) -> fmt::Result {
        writeln!(out, "Best & Worst Weather for Cycling")?;

        let label_width = report.weather.iter().map(|w| w.label.len()).max().unwrap_or(0);

        let by_hours: Vec<(&str, f64, String)> = report
            .weather
            .iter()
            .map(|w| (w.label, w.hours_observed as f64, w.hours_observed.to_string()))
            .collect();
        let by_people: Vec<(&str, f64, String)> = report
            .weather
            .iter()
            .map(|w| (w.label, w.people_count as f64, w.people_count.to_string()))
            .collect();
        let by_average: Vec<(&str, f64, String)> = report
            .weather
            .iter()
            .map(|w| match w.mean_per_hour {
                Some(mean) => (w.label, mean, format!("{:.1}", mean)),
                None => (w.label, 0.0, "n/a".to_string()),
            })
            .collect();

        for (title, rows) in [
            ("By Hours", by_hours),
            ("By People", by_people),
            ("By Average", by_average),
        ] {
            let max = rows.iter().map(|r| r.1).fold(0.0_f64, f64::max);
            writeln!(out, "  {}", title)?;
            for (label, value, text) in &rows {
                writeln!(
                    out,
                    "  {:<lw$} | {:<width$} {}",
                    label,
                    self.bar(*value, max),
                    text,
                    lw = label_width,
                    width = self.chart_width
                )?;
            }
        }

        if !report.missing_weather_categories.is_empty() {
            let missing: Vec<&str> = report
                .missing_weather_categories
                .iter()
                .map(|w| w.label())
                .collect();
            writeln!(out, "  No hours observed: {}", missing.join(", "))?;
        }
        writeln!(out)
    }

    fn render_daily<W: Write>(&self, report: &RentalReport, out: &mut W) -> fmt::Result {
        writeln!(out, "Daily Rentals")?;
        writeln!(out, "{:<10} {:>5} {:>8}", "date", "hours", "people")?;
        for day in &report.daily {
            writeln!(
                out,
                "{:<10} {:>5} {:>8}",
                day.date.to_string(),
                day.hours_observed,
                day.people_count
            )?;
        }
        writeln!(out)
    }

    /// Bar scaled against `max`; non-positive values draw nothing.
    fn bar(&self, value: f64, max: f64) -> String {
        if max <= 0.0 || value <= 0.0 {
            return String::new();
        }
        let len = ((value / max) * self.chart_width as f64).round() as usize;
        BAR_CHAR.to_string().repeat(len.clamp(1, self.chart_width))
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn digits(value: i64) -> usize {
    value.to_string().len()
}
