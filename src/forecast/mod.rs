/// Trend forecasting for the sea-level series.
///
/// The pipeline treats the forecaster as an opaque collaborator: anything
/// that can turn the historical annual means into an exclusive end year
/// plus an ordered run of predicted values. The default implementation is
/// the Theil–Sen estimator in `theilsen`; tests substitute fixed stubs.

pub mod theilsen;

use crate::model::{AnnualMeans, PipelineError};

/// First forecast year. Historical data runs through 2020, so predictions
/// start the year after.
pub const FORECAST_START_YEAR: i32 = 2021;

/// Output of a trend-estimation routine: predicted values for each year in
/// `FORECAST_START_YEAR..end_year_exclusive`, in year order.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub end_year_exclusive: i32,
    pub values: Vec<f64>,
}

/// The seam between the pipeline and whatever model produces predictions.
pub trait TrendForecaster {
    /// Estimates future annual means from the historical ones.
    fn forecast(&self, history: &AnnualMeans) -> Result<Forecast, PipelineError>;
}

/// Runs the forecaster and pairs each year in the forecast range with the
/// next predicted value, in order.
///
/// Fails with `ForecastExhausted` if the routine returned fewer values than
/// the range has years. Extra values beyond the range are ignored.
pub fn forecast_rows(
    forecaster: &dyn TrendForecaster,
    history: &AnnualMeans,
) -> Result<Vec<(i32, f64)>, PipelineError> {
    let forecast = forecaster.forecast(history)?;

    let years = FORECAST_START_YEAR..forecast.end_year_exclusive;
    let needed = years.clone().count();
    if forecast.values.len() < needed {
        return Err(PipelineError::ForecastExhausted {
            needed,
            got: forecast.values.len(),
        });
    }

    Ok(years.zip(forecast.values).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-output forecaster for exercising the bridge in isolation.
    struct Stub {
        end_year_exclusive: i32,
        values: Vec<f64>,
    }

    impl TrendForecaster for Stub {
        fn forecast(&self, _history: &AnnualMeans) -> Result<Forecast, PipelineError> {
            Ok(Forecast {
                end_year_exclusive: self.end_year_exclusive,
                values: self.values.clone(),
            })
        }
    }

    #[test]
    fn test_rows_pair_years_with_values_in_order() {
        let stub = Stub {
            end_year_exclusive: 2024,
            values: vec![1.0, 2.0, 3.0],
        };
        let rows = forecast_rows(&stub, &AnnualMeans::new()).unwrap();
        assert_eq!(rows, vec![(2021, 1.0), (2022, 2.0), (2023, 3.0)]);
    }

    #[test]
    fn test_too_few_values_is_an_error() {
        let stub = Stub {
            end_year_exclusive: 2024,
            values: vec![1.0, 2.0],
        };
        let result = forecast_rows(&stub, &AnnualMeans::new());
        assert!(matches!(
            result,
            Err(PipelineError::ForecastExhausted { needed: 3, got: 2 })
        ));
    }

    #[test]
    fn test_empty_range_yields_no_rows() {
        let stub = Stub {
            end_year_exclusive: FORECAST_START_YEAR,
            values: vec![],
        };
        let rows = forecast_rows(&stub, &AnnualMeans::new()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_extra_values_are_ignored() {
        let stub = Stub {
            end_year_exclusive: 2022,
            values: vec![9.0, 99.0, 999.0],
        };
        let rows = forecast_rows(&stub, &AnnualMeans::new()).unwrap();
        assert_eq!(rows, vec![(2021, 9.0)]);
    }
}
