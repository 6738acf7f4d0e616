use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CHART_WIDTH, DEFAULT_CONFIG_FILE, DEFAULT_DATA_PATH, ENV_PREFIX,
};
use clap::ValueEnum;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runtime settings: defaults, then `bikeshare.toml` (or an explicit
/// file), then `BIKESHARE_*` environment variables. CLI flags are applied
/// last through [`Settings::with_overrides`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    pub data_path: PathBuf,

    #[validate(range(min = 10, max = 200))]
    pub chart_width: usize,

    pub format: OutputFormat,
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("data_path", DEFAULT_DATA_PATH)?
            .set_default("chart_width", DEFAULT_CHART_WIDTH as i64)?
            .set_default("format", "text")?;

        let builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn with_overrides(
        mut self,
        data_path: Option<PathBuf>,
        format: Option<OutputFormat>,
        chart_width: Option<usize>,
    ) -> Result<Self> {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(width) = chart_width {
            self.chart_width = width;
        }

        self.validate()?;
        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            chart_width: DEFAULT_CHART_WIDTH,
            format: OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use std::io::Write;

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_path = \"rentals/hour.csv\"")?;
        writeln!(file, "chart_width = 80")?;
        writeln!(file, "format = \"json\"")?;

        let settings = Settings::load(Some(file.path()))?;

        assert_eq!(settings.data_path, PathBuf::from("rentals/hour.csv"));
        assert_eq!(settings.chart_width, 80);
        assert_eq!(settings.format, OutputFormat::Json);

        Ok(())
    }

    #[test]
    fn test_file_values_fall_back_to_defaults() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "chart_width = 30")?;

        let settings = Settings::load(Some(file.path()))?;

        assert_eq!(settings.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(settings.chart_width, 30);
        assert_eq!(settings.format, OutputFormat::Text);

        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Settings::load(Some(Path::new("no/such/bikeshare.toml")));
        assert!(matches!(result, Err(ReportError::Config(_))));
    }

    #[test]
    fn test_overrides_are_validated() {
        let settings = Settings::default()
            .with_overrides(Some(PathBuf::from("x.csv")), Some(OutputFormat::Json), None)
            .unwrap();
        assert_eq!(settings.data_path, PathBuf::from("x.csv"));
        assert_eq!(settings.format, OutputFormat::Json);

        let too_narrow = Settings::default().with_overrides(None, None, Some(3));
        assert!(matches!(too_narrow, Err(ReportError::Validation(_))));
    }
}
