/// Run configuration for the sea-level pipeline.
///
/// File paths and the forecast horizon are configuration fields rather than
/// literals buried in the writers, so tests and one-off runs can point the
/// pipeline anywhere. Loaded from a TOML file; every field has a default
/// matching the historical file layout, so a missing or partial config
/// still produces the original outputs.

use serde::Deserialize;

use crate::model::PipelineError;

/// Default input: the raw multi-mission altimetry export.
const DEFAULT_INPUT: &str = "data/sea_level.csv";
/// Default condensed-plus-forecast output.
const DEFAULT_PREDICTIONS: &str = "data_predictions.csv";
/// Default calendar-dated raw series for the SARIMAX model.
const DEFAULT_MODEL_DATA: &str = "Sarimax_Model_Data.csv";
/// Default exclusive end of the forecast range.
const DEFAULT_FORECAST_END_YEAR: i32 = 2051;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Path to the raw altimetry CSV.
    pub input_path: String,
    /// Where the annual means + forecast rows are written.
    pub predictions_path: String,
    /// Where the calendar-dated raw series is written.
    pub model_data_path: String,
    /// Exclusive end year of the forecast range (start is fixed at 2021).
    pub forecast_end_year: i32,
    /// Optional log file; console-only logging when absent.
    pub log_file: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT.to_string(),
            predictions_path: DEFAULT_PREDICTIONS.to_string(),
            model_data_path: DEFAULT_MODEL_DATA.to_string(),
            forecast_end_year: DEFAULT_FORECAST_END_YEAR,
            log_file: None,
        }
    }
}

impl PipelineConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, PipelineError> {
        toml::from_str(contents).map_err(|e| PipelineError::BadConfig(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
