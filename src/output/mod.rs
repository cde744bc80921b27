/// Output serialization for the sea-level pipeline.
///
/// Submodules:
/// - `csv_out` — writes the condensed-plus-forecast CSV and the
///   calendar-dated raw series CSV consumed by the SARIMAX model.

pub mod csv_out;
