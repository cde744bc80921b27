/// Input parsing for the sea-level pipeline.
///
/// Submodules:
/// - `altimetry` — reads the fixed-format satellite altimetry CSV into a
///   per-source dataset.

pub mod altimetry;
