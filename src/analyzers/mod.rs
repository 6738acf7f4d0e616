pub mod daily;
pub mod metrics;
pub mod monthly;
pub mod report;
pub mod season;
pub mod weather;

pub use daily::aggregate_daily;
pub use metrics::ReportMetrics;
pub use monthly::aggregate_monthly;
pub use report::{RentalAnalyzer, RentalReport};
pub use season::aggregate_season_changes;
pub use weather::{aggregate_weather, missing_weather_categories};
