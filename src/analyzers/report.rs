use crate::analyzers::{
    aggregate_daily, aggregate_monthly, aggregate_season_changes, aggregate_weather,
    missing_weather_categories, ReportMetrics,
};
use crate::error::{ReportError, Result};
use crate::models::{
    DailySummary, DateRange, MonthlySummary, RentalDataset, SeasonChange, WeatherSituation,
    WeatherSummary,
};
use crate::processors::filter_by_range;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything the dashboard shows for one date-range selection.
#[derive(Debug, Clone, Serialize)]
pub struct RentalReport {
    pub range: DateRange,
    pub has_data: bool,
    pub metrics: ReportMetrics,
    pub daily: Vec<DailySummary>,
    pub monthly: Vec<MonthlySummary>,
    pub weather: Vec<WeatherSummary>,
    pub missing_weather_categories: Vec<WeatherSituation>,
    pub season_changes: Vec<SeasonChange>,
}

impl RentalReport {
    /// Fail with `EmptySelection` when the range matched no rows.
    pub fn require_data(&self) -> Result<&Self> {
        if self.has_data {
            Ok(self)
        } else {
            Err(ReportError::EmptySelection {
                start: self.range.start,
                end: self.range.end,
            })
        }
    }

    pub fn summary(&self) -> String {
        match self.metrics.average_people_per_hour {
            Some(average) => format!(
                "{}: {} people over {} hours ({} per hour), {} days, {} months",
                self.range,
                self.metrics.total_people,
                self.metrics.total_hours,
                average,
                self.daily.len(),
                self.monthly.len()
            ),
            None => format!("{}: no data", self.range),
        }
    }
}

/// Runs filter and aggregations for a selection. Every call recomputes
/// from the dataset; nothing is cached between selections.
pub struct RentalAnalyzer;

impl RentalAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, dataset: &RentalDataset, range: DateRange) -> RentalReport {
        let table = filter_by_range(dataset, range);
        info!("Selected {} records for {}", table.len(), range);

        let daily = aggregate_daily(&table);
        let monthly = aggregate_monthly(&table);
        let weather = aggregate_weather(&table);
        let season_changes = aggregate_season_changes(&table);
        let metrics = ReportMetrics::from_daily(&daily);

        debug!(
            "Aggregated {} days, {} months, {} weather rows, {} season changes",
            daily.len(),
            monthly.len(),
            weather.len(),
            season_changes.len()
        );

        if table.is_empty() {
            warn!("No records between {}", range);
        }

        let missing_weather = if table.is_empty() {
            Vec::new()
        } else {
            missing_weather_categories(&weather)
        };
        if !missing_weather.is_empty() {
            warn!("Weather categories absent from selection: {:?}", missing_weather);
        }

        RentalReport {
            range,
            has_data: !table.is_empty(),
            metrics,
            daily,
            monthly,
            weather,
            missing_weather_categories: missing_weather,
            season_changes,
        }
    }

    /// Report over the whole dataset.
    pub fn analyze_all(&self, dataset: &RentalDataset) -> Result<RentalReport> {
        let bounds = dataset.date_bounds()?;
        Ok(self.analyze(dataset, bounds))
    }
}

impl Default for RentalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
