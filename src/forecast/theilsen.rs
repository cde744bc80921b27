/// Theil–Sen trend estimator.
///
/// Robust linear trend over the historical annual means: the slope is the
/// median of all pairwise slopes and the intercept is the median residual
/// against that slope. Far less sensitive to the handover-year outliers in
/// the altimetry record than ordinary least squares.

use super::{Forecast, TrendForecaster, FORECAST_START_YEAR};
use crate::model::{AnnualMeans, PipelineError};

/// Default forecaster: a Theil–Sen line extrapolated through the exclusive
/// end year configured at construction.
pub struct TheilSen {
    end_year_exclusive: i32,
}

impl TheilSen {
    pub fn new(end_year_exclusive: i32) -> Self {
        Self { end_year_exclusive }
    }
}

impl TrendForecaster for TheilSen {
    fn forecast(&self, history: &AnnualMeans) -> Result<Forecast, PipelineError> {
        let points: Vec<(f64, f64)> = history
            .iter()
            .filter_map(|(year, mean)| year.parse::<f64>().ok().map(|y| (y, *mean)))
            .collect();

        let (slope, intercept) = fit_line(&points);

        let values = (FORECAST_START_YEAR..self.end_year_exclusive)
            .map(|year| slope * year as f64 + intercept)
            .collect();

        Ok(Forecast {
            end_year_exclusive: self.end_year_exclusive,
            values,
        })
    }
}

/// Fits `y = slope * x + intercept` by Theil–Sen.
///
/// Degenerate histories degrade gracefully: a single point gives a flat
/// line through it, an empty history gives the zero line.
fn fit_line(points: &[(f64, f64)]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    if points.len() == 1 {
        return (0.0, points[0].1);
    }

    let mut slopes = Vec::with_capacity(points.len() * (points.len() - 1) / 2);
    for (i, &(x1, y1)) in points.iter().enumerate() {
        for &(x2, y2) in &points[i + 1..] {
            if x2 != x1 {
                slopes.push((y2 - y1) / (x2 - x1));
            }
        }
    }
    if slopes.is_empty() {
        // all points share one x — no trend is recoverable
        let mut ys: Vec<f64> = points.iter().map(|&(_, y)| y).collect();
        return (0.0, median(&mut ys));
    }
    let slope = median(&mut slopes);

    let mut residuals: Vec<f64> = points.iter().map(|&(x, y)| y - slope * x).collect();
    let intercept = median(&mut residuals);

    (slope, intercept)
}

/// Median of a slice, averaging the middle pair for even lengths.
/// Sorts in place; callers pass scratch vectors.
fn median(values: &mut [f64]) -> f64 {
    values.sort_unstable_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
