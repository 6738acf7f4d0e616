pub mod constants;
pub mod dates;
pub mod progress;

pub use constants::*;
pub use dates::{month_label, parse_date_cell};
pub use progress::ProgressReporter;
