/// Decimal-year to calendar-date conversion.
///
/// The raw altimetry file timestamps observations as decimal years
/// (e.g. 2003.5 ≈ mid-2003). The SARIMAX export needs real calendar dates,
/// truncated to the first of the month, so downstream tooling can treat the
/// series as monthly.

use chrono::{Datelike, Duration, NaiveDate};

use crate::model::PipelineError;

/// Converts a decimal year to a calendar date, truncated to the first day
/// of its month.
///
/// The fractional remainder is scaled against the actual duration of that
/// year (365 or 366 days), so 2003.5 lands within a day of 2003-07-01 and
/// leap years stay aligned. Returns `DateOutOfRange` if the whole-year part
/// is outside chrono's representable calendar.
pub fn decimal_year_to_date(decimal_year: f64) -> Result<NaiveDate, PipelineError> {
    let year = decimal_year.trunc() as i32;
    let rem = decimal_year - year as f64;

    let base = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or(PipelineError::DateOutOfRange(decimal_year))?;
    let next = NaiveDate::from_ymd_opt(year + 1, 1, 1)
        .ok_or(PipelineError::DateOutOfRange(decimal_year))?;

    let year_secs = (next - base).num_seconds() as f64;
    let offset = Duration::seconds((year_secs * rem) as i64);

    let date = base
        .and_hms_opt(0, 0, 0)
        .ok_or(PipelineError::DateOutOfRange(decimal_year))?
        .checked_add_signed(offset)
        .ok_or(PipelineError::DateOutOfRange(decimal_year))?
        .date();

    date.with_day(1)
        .ok_or(PipelineError::DateOutOfRange(decimal_year))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
