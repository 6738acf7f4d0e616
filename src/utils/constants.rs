/// Column names in the hourly input file
pub const COL_DATE: &str = "dteday";
pub const COL_HOUR: &str = "hr";
pub const COL_SEASON: &str = "season";
pub const COL_WEATHER: &str = "weathersit";
pub const COL_COUNT: &str = "cnt";

pub const REQUIRED_COLUMNS: [&str; 5] = [COL_DATE, COL_HOUR, COL_SEASON, COL_WEATHER, COL_COUNT];

/// Accepted date cell formats; time-of-day is discarded
pub const DATE_ONLY_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
pub const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Month label format, sortable as text
pub const MONTH_LABEL_FORMAT: &str = "%Y-%m";

/// Label for category codes outside the known range
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Configuration
pub const DEFAULT_CONFIG_FILE: &str = "bikeshare";
pub const ENV_PREFIX: &str = "BIKESHARE";
pub const DEFAULT_DATA_PATH: &str = "data/hour.csv";
pub const DEFAULT_CHART_WIDTH: usize = 50;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const PROGRESS_INTERVAL: u64 = 5000;
