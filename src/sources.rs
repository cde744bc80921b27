/// Satellite source registry for the sea-level pipeline.
///
/// Defines the canonical list of altimetry missions whose series appear in
/// the input file, along with their metadata and fixed column positions.
/// This is the single source of truth for source names — all other modules
/// should reference sources from here rather than hardcoding names.

// ---------------------------------------------------------------------------
// Input format constants
// ---------------------------------------------------------------------------

/// Number of metadata rows before the first data row in the input file.
pub const PREAMBLE_ROWS: usize = 6;

/// Minimum columns per data row: the decimal-year label plus one value
/// column per registered source.
pub const MIN_COLUMNS: usize = 5;

// ---------------------------------------------------------------------------
// Source metadata
// ---------------------------------------------------------------------------

/// Metadata for a single satellite altimetry mission.
pub struct SatelliteSource {
    /// Series name as used in the input file and output datasets.
    pub name: &'static str,
    /// Official mission name.
    pub mission: &'static str,
    /// Zero-based column index of this source's value in a data row
    /// (column 0 is the decimal-year label).
    pub column: usize,
    /// First year the mission reported data.
    pub first_year: i32,
}

/// All altimetry missions contributing to the sea-level series, in
/// mission-chronological order.
///
/// Registry order matters: `analysis::annual::group_means` walks sources in
/// this order, and the pairwise duplicate-year merge depends on it. It
/// matches the column order of the input file.
pub static SOURCE_REGISTRY: &[SatelliteSource] = &[
    SatelliteSource {
        name: "topex_pos",
        mission: "TOPEX/Poseidon",
        column: 1,
        first_year: 1992,
    },
    SatelliteSource {
        name: "jason-1",
        mission: "Jason-1",
        column: 2,
        first_year: 2002,
    },
    SatelliteSource {
        name: "jason-2",
        mission: "Jason-2/OSTM",
        column: 3,
        first_year: 2008,
    },
    SatelliteSource {
        name: "jason-3",
        mission: "Jason-3",
        column: 4,
        first_year: 2016,
    },
];

/// Returns the names of all registered sources, in registry order.
pub fn all_source_names() -> Vec<&'static str> {
    SOURCE_REGISTRY.iter().map(|s| s.name).collect()
}

/// Looks up a source by name. Returns `None` if not found.
pub fn find_source(name: &str) -> Option<&'static SatelliteSource> {
    SOURCE_REGISTRY.iter().find(|s| s.name == name)
}

/// Returns the data-row column index for a source name, if registered.
pub fn column_for(name: &str) -> Option<usize> {
    find_source(name).map(|s| s.column)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_all_expected_missions() {
        let expected = ["topex_pos", "jason-1", "jason-2", "jason-3"];
        let names = all_source_names();
        for expected_name in &expected {
            assert!(
                names.contains(expected_name),
                "SOURCE_REGISTRY missing expected source '{}'",
                expected_name
            );
        }
        assert_eq!(names.len(), expected.len());
    }

    #[test]
    fn test_no_duplicate_source_names() {
        let mut seen = std::collections::HashSet::new();
        for source in SOURCE_REGISTRY {
            assert!(
                seen.insert(source.name),
                "duplicate source name '{}' found in SOURCE_REGISTRY",
                source.name
            );
        }
    }

    #[test]
    fn test_columns_are_contiguous_and_within_row_width() {
        // Columns 1..=4 after the decimal-year label in column 0. A gap or
        // an index past MIN_COLUMNS would make the reader skip or misread
        // a series.
        for (i, source) in SOURCE_REGISTRY.iter().enumerate() {
            assert_eq!(
                source.column,
                i + 1,
                "column for '{}' out of order",
                source.name
            );
            assert!(source.column < MIN_COLUMNS);
        }
    }

    #[test]
    fn test_registry_is_mission_chronological() {
        for pair in SOURCE_REGISTRY.windows(2) {
            assert!(
                pair[0].first_year < pair[1].first_year,
                "'{}' should predate '{}'",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_find_source_returns_correct_entry() {
        let source = find_source("topex_pos").expect("topex_pos should be in registry");
        assert_eq!(source.mission, "TOPEX/Poseidon");
        assert_eq!(source.column, 1);
    }

    #[test]
    fn test_find_source_returns_none_for_unknown_name() {
        assert!(find_source("envisat").is_none());
        assert!(column_for("envisat").is_none());
    }
}
