use crate::analyzers::RentalAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::config::{OutputFormat, Settings};
use crate::error::Result;
use crate::models::{DateRange, RentalDataset, WeatherSituation};
use crate::readers::RentalReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::{JsonWriter, TextRenderer};
use chrono::NaiveDate;
use std::path::Path;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Report {
            data,
            start,
            end,
            format,
            output,
            chart_width,
            show_daily,
            fail_on_empty,
        } => {
            let settings = settings.with_overrides(data, format, chart_width)?;
            let dataset = load_dataset(&settings.data_path, cli.quiet)?;

            let range = resolve_range(&dataset, start, end)?;
            let report = RentalAnalyzer::new().analyze(&dataset, range);
            info!("{}", report.summary());

            if fail_on_empty {
                report.require_data()?;
            }

            match settings.format {
                OutputFormat::Text => {
                    let renderer = TextRenderer::new()
                        .with_chart_width(settings.chart_width)
                        .with_daily(show_daily);

                    match output {
                        Some(path) => renderer.write_to_path(&report, &path)?,
                        None => print!("{}", renderer.render(&report)),
                    }
                }
                OutputFormat::Json => {
                    let writer = JsonWriter::new();
                    match output {
                        Some(path) => writer.write_to_path(&report, &path)?,
                        None => writer.write(&report, std::io::stdout().lock())?,
                    }
                }
            }
        }

        Commands::Info { data } => {
            let settings = settings.with_overrides(data, None, None)?;
            let dataset = load_dataset(&settings.data_path, cli.quiet)?;
            let bounds = dataset.date_bounds()?;

            println!("Dataset: {}", settings.data_path.display());
            println!("Records: {}", dataset.len());
            println!("Date Range: {}", bounds);
            println!("Distinct Days: {}", dataset.distinct_days());

            let weather: Vec<String> = dataset
                .weather_codes()
                .into_iter()
                .map(|code| format!("{} ({})", WeatherSituation::label_for_code(code), code))
                .collect();
            println!("Weather Categories: {}", weather.join(", "));
        }
    }

    Ok(())
}

/// Missing ends default to the dataset bounds; both ends are then clamped
/// into them, as the date picker only offers dates inside the data.
fn resolve_range(
    dataset: &RentalDataset,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<DateRange> {
    let bounds = dataset.date_bounds()?;
    let range = DateRange::new(start.unwrap_or(bounds.start), end.unwrap_or(bounds.end));
    Ok(range.clamp_to(bounds))
}

fn load_dataset(path: &Path, quiet: bool) -> Result<RentalDataset> {
    let progress = ProgressReporter::new_spinner("Loading rentals...", quiet);
    let dataset = RentalReader::new().read_dataset(path, Some(&progress))?;
    progress.finish_with_message(&format!("Loaded {} records", dataset.len()));
    Ok(dataset)
}
