/// Core data types for the sea-level annual-means pipeline.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies — only types.

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// A single satellite altimetry measurement.
///
/// `epoch` is the raw decimal-year label from the input file (e.g.
/// "2003.5410"), kept as a string so the 4-character year prefix used by
/// the aggregator is exactly what the file said. `value` is the measured
/// sea level in millimetres. Immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub epoch: String,
    pub value: f64,
}

/// Per-source observation series, keyed by source name.
///
/// Built once by `ingest::altimetry::read_csv_data` with exactly the four
/// keys from `sources::SOURCE_REGISTRY`; not mutated afterward. A source
/// with no usable rows maps to an empty vector.
pub type SourceDataset = BTreeMap<String, Vec<Observation>>;

/// One mean sea level per 4-character year key.
///
/// A `BTreeMap` so iteration (and therefore CSV row order) is always sorted
/// by year rather than depending on insertion order. Every key corresponds
/// to at least one observation from at least one source in that year.
pub type AnnualMeans = BTreeMap<String, f64>;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise while reading, converting, or writing pipeline data.
///
/// All of these are fatal to the run: this is a batch pipeline, not a
/// long-lived service, so there is no retry layer on top.
#[derive(Debug)]
pub enum PipelineError {
    /// Underlying file I/O failure.
    Io(std::io::Error),
    /// A data row had fewer columns than the fixed input format requires.
    MalformedRow { line: usize, found: usize },
    /// A non-empty satellite column could not be parsed as a number.
    BadValue {
        line: usize,
        source: String,
        raw: String,
    },
    /// An epoch label could not be read back as a decimal year.
    BadEpoch { source: String, raw: String },
    /// A decimal year fell outside the representable calendar range.
    DateOutOfRange(f64),
    /// The forecast routine returned fewer values than the year range needs.
    ForecastExhausted { needed: usize, got: usize },
    /// The configuration file could not be parsed.
    BadConfig(String),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Io(err) => write!(f, "I/O error: {}", err),
            PipelineError::MalformedRow { line, found } => {
                write!(
                    f,
                    "Malformed row at line {}: expected at least {} columns, found {}",
                    line,
                    crate::sources::MIN_COLUMNS,
                    found
                )
            }
            PipelineError::BadValue { line, source, raw } => {
                write!(
                    f,
                    "Bad value at line {} for {}: '{}' is not a number",
                    line, source, raw
                )
            }
            PipelineError::BadEpoch { source, raw } => {
                write!(
                    f,
                    "Epoch label '{}' from {} is not a decimal year",
                    raw, source
                )
            }
            PipelineError::DateOutOfRange(year) => {
                write!(f, "Decimal year {} is outside the calendar range", year)
            }
            PipelineError::ForecastExhausted { needed, got } => {
                write!(
                    f,
                    "Forecast returned {} values but {} years were requested",
                    got, needed
                )
            }
            PipelineError::BadConfig(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Io(err)
    }
}
