/// CSV writers for the two pipeline products.
///
/// Both files share the `year,mean_sea_level` header. The predictions file
/// carries the condensed annual means followed by forecast rows; the model
/// file carries every raw observation with its epoch rewritten as a
/// calendar date, for tooling that wants a real time axis.
///
/// Floats are written with Rust's shortest-roundtrip formatting, so reading
/// a file back recovers the exact values.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::dates::decimal_year_to_date;
use crate::forecast::{forecast_rows, TrendForecaster};
use crate::model::{AnnualMeans, PipelineError, SourceDataset};
use crate::sources::SOURCE_REGISTRY;

/// Shared header for both output files.
pub const CSV_HEADER: &str = "year,mean_sea_level";

/// Writes the annual means to `path`, sorted by year, then invokes the
/// forecaster and appends one row per forecast year to the same file.
///
/// The file is created (or truncated) and closed on all exit paths by
/// scoping; a forecast failure leaves no half-flushed buffer behind.
pub fn write_annual_means(
    path: &str,
    means: &AnnualMeans,
    forecaster: &dyn TrendForecaster,
) -> Result<(), PipelineError> {
    let predicted = forecast_rows(forecaster, means)?;

    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{}", CSV_HEADER)?;
    for (year, mean) in means {
        writeln!(file, "{},{}", year, mean)?;
    }
    for (year, value) in predicted {
        writeln!(file, "{},{}", year, value)?;
    }
    file.flush()?;

    Ok(())
}

/// Writes every raw observation to `path` with its decimal-year epoch
/// converted to a first-of-month calendar date.
///
/// No aggregation: sources are flattened in registry order, each series in
/// its original file order.
pub fn write_datetime_series(path: &str, dataset: &SourceDataset) -> Result<(), PipelineError> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{}", CSV_HEADER)?;

    for source in SOURCE_REGISTRY {
        let Some(series) = dataset.get(source.name) else {
            continue;
        };
        for obs in series {
            let decimal: f64 = obs.epoch.parse().map_err(|_| PipelineError::BadEpoch {
                source: source.name.to_string(),
                raw: obs.epoch.clone(),
            })?;
            let date = decimal_year_to_date(decimal)?;
            writeln!(file, "{},{}", date, obs.value)?;
        }
    }
    file.flush()?;

    Ok(())
}

/// Reads a `year,mean_sea_level` file back into (year, value) pairs.
///
/// Used to close the write/read round trip; the integration tests lean on
/// it to check value preservation.
pub fn read_predictions_csv(path: &str) -> Result<Vec<(String, f64)>, PipelineError> {
    let contents = std::fs::read_to_string(path)?;
    let mut rows = Vec::new();

    for (i, line) in contents.lines().enumerate() {
        if i == 0 || line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return Err(PipelineError::MalformedRow {
                line: i + 1,
                found: fields.len(),
            });
        }
        let value: f64 = fields[1].trim().parse().map_err(|_| PipelineError::BadValue {
            line: i + 1,
            source: "mean_sea_level".to_string(),
            raw: fields[1].to_string(),
        })?;
        rows.push((fields[0].to_string(), value));
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Forecast;
    use crate::model::Observation;

    /// Forecaster returning a fixed pair of rows for 2021 and 2022.
    struct TwoYearStub;

    impl TrendForecaster for TwoYearStub {
        fn forecast(&self, _history: &AnnualMeans) -> Result<Forecast, PipelineError> {
            Ok(Forecast {
                end_year_exclusive: 2023,
                values: vec![71.5, 73.25],
            })
        }
    }

    fn sample_means() -> AnnualMeans {
        let mut means = AnnualMeans::new();
        means.insert("1994".to_string(), 21.125);
        means.insert("1993".to_string(), 15.0);
        means
    }

    #[test]
    fn test_annual_means_rows_are_sorted_then_forecast_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_predictions.csv");
        let path = path.to_str().unwrap();

        write_annual_means(path, &sample_means(), &TwoYearStub).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "year,mean_sea_level",
                "1993,15",
                "1994,21.125",
                "2021,71.5",
                "2022,73.25",
            ]
        );
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_predictions.csv");
        let path = path.to_str().unwrap();

        let mut means = AnnualMeans::new();
        // deliberately awkward decimals
        means.insert("1993".to_string(), 15.000001);
        means.insert("2002".to_string(), -3.3333333333333335);

        write_annual_means(path, &means, &TwoYearStub).unwrap();
        let rows = read_predictions_csv(path).unwrap();

        assert_eq!(rows[0], ("1993".to_string(), 15.000001));
        assert_eq!(rows[1], ("2002".to_string(), -3.3333333333333335));
    }

    #[test]
    fn test_datetime_series_flattens_sources_with_calendar_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sarimax_Model_Data.csv");
        let path = path.to_str().unwrap();

        let mut dataset = SourceDataset::new();
        dataset.insert(
            "topex_pos".to_string(),
            vec![Observation {
                epoch: "1993.0".to_string(),
                value: 10.0,
            }],
        );
        dataset.insert(
            "jason-1".to_string(),
            vec![Observation {
                epoch: "2002.5".to_string(),
                value: 20.5,
            }],
        );

        write_datetime_series(path, &dataset).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        // registry order: topex_pos before jason-1
        assert_eq!(lines[0], "year,mean_sea_level");
        assert_eq!(lines[1], "1993-01-01,10");
        assert_eq!(lines[2], "2002-07-01,20.5");
    }

    #[test]
    fn test_bad_epoch_label_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let path = path.to_str().unwrap();

        let mut dataset = SourceDataset::new();
        dataset.insert(
            "topex_pos".to_string(),
            vec![Observation {
                epoch: "not-a-year".to_string(),
                value: 10.0,
            }],
        );

        let result = write_datetime_series(path, &dataset);
        assert!(matches!(result, Err(PipelineError::BadEpoch { .. })));
    }

    #[test]
    fn test_read_predictions_rejects_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, "year,mean_sea_level\n1993\n").unwrap();

        let result = read_predictions_csv(path.to_str().unwrap());
        assert!(matches!(
            result,
            Err(PipelineError::MalformedRow { line: 2, found: 1 })
        ));
    }
}
