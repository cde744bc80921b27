/// Satellite altimetry CSV reader.
///
/// The input file is a fixed-format export: 6 metadata rows, then one data
/// row per measurement epoch with the decimal-year label in column 0 and
/// one value column per mission in registry order. An empty value column
/// means the mission was not reporting at that epoch.
///
/// Format reference: NASA Goddard / integrated multi-mission ocean altimeter
/// data, as distributed for the Vancouver sea-level series (1992–2020).

use std::fs;

use crate::model::{Observation, PipelineError, SourceDataset};
use crate::sources::{MIN_COLUMNS, PREAMBLE_ROWS, SOURCE_REGISTRY};

/// Reads the altimetry CSV at `path` into a per-source dataset.
///
/// The result always contains exactly the four registry keys; a mission
/// with no usable rows maps to an empty vector. Empty value columns are
/// skipped. Fails on a data row with fewer than `MIN_COLUMNS` columns, on
/// a non-empty value that is not a number, or on any I/O error.
pub fn read_csv_data(path: &str) -> Result<SourceDataset, PipelineError> {
    let contents = fs::read_to_string(path)?;
    parse_altimetry_csv(&contents)
}

/// Parses the raw file contents. Split out from `read_csv_data` so tests
/// can exercise the format handling without touching the filesystem.
pub fn parse_altimetry_csv(contents: &str) -> Result<SourceDataset, PipelineError> {
    let mut columns: Vec<Vec<Observation>> = vec![Vec::new(); SOURCE_REGISTRY.len()];

    for (i, line) in contents.lines().enumerate() {
        if i < PREAMBLE_ROWS || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < MIN_COLUMNS {
            return Err(PipelineError::MalformedRow {
                line: i + 1,
                found: fields.len(),
            });
        }

        let epoch = fields[0].trim();
        for (idx, source) in SOURCE_REGISTRY.iter().enumerate() {
            let raw = fields[source.column].trim();
            if raw.is_empty() {
                continue; // mission not reporting at this epoch
            }
            let value: f64 = raw.parse().map_err(|_| PipelineError::BadValue {
                line: i + 1,
                source: source.name.to_string(),
                raw: raw.to_string(),
            })?;
            columns[idx].push(Observation {
                epoch: epoch.to_string(),
                value,
            });
        }
    }

    Ok(SOURCE_REGISTRY
        .iter()
        .zip(columns)
        .map(|(source, series)| (source.name.to_string(), series))
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
