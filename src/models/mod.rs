pub mod category;
pub mod dataset;
pub mod record;
pub mod summary;

pub use category::{Season, WeatherSituation};
pub use dataset::{DateRange, RentalDataset};
pub use record::HourlyRecord;
pub use summary::{DailySummary, MonthlySummary, SeasonChange, WeatherSummary};
