use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No records between {start} and {end}")]
    EmptySelection { start: NaiveDate, end: NaiveDate },

    #[error("Dataset contains no records")]
    EmptyDataset,
}

impl ReportError {
    /// Errors raised while reading the input file; fatal at startup.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ReportError::Io(_)
                | ReportError::Csv(_)
                | ReportError::MissingColumns { .. }
                | ReportError::MalformedRow { .. }
        )
    }
}
