/// Sea-level annual-means pipeline.
///
/// Reads a multi-mission satellite altimetry CSV, condenses it into annual
/// mean sea levels with duplicate-year reconciliation, extends the series
/// with a trend forecast, and writes two CSVs for downstream plotting and
/// the SARIMAX model.

pub mod analysis;
pub mod config;
pub mod dates;
pub mod forecast;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod output;
pub mod sources;

use crate::config::PipelineConfig;
use crate::forecast::theilsen::TheilSen;
use crate::logging::{info, Stage};
use crate::model::PipelineError;

/// Runs the full batch: read, condense, forecast, write both outputs.
///
/// Any failure aborts the run; there is nothing to retry in a pipeline this
/// small, and a partial output pair would be worse than none.
pub fn run(config: &PipelineConfig) -> Result<(), PipelineError> {
    let dataset = ingest::altimetry::read_csv_data(&config.input_path)?;
    let total: usize = dataset.values().map(Vec::len).sum();
    info(
        Stage::Ingest,
        &format!(
            "read {} observations across {} sources from {}",
            total,
            dataset.len(),
            config.input_path
        ),
    );

    let means = analysis::annual::group_means(&dataset);
    info(
        Stage::Analysis,
        &format!("condensed to {} annual means", means.len()),
    );

    let forecaster = TheilSen::new(config.forecast_end_year);
    output::csv_out::write_annual_means(&config.predictions_path, &means, &forecaster)?;
    info(
        Stage::Output,
        &format!("wrote annual means + forecast to {}", config.predictions_path),
    );

    output::csv_out::write_datetime_series(&config.model_data_path, &dataset)?;
    info(
        Stage::Output,
        &format!("wrote calendar-dated series to {}", config.model_data_path),
    );

    Ok(())
}
