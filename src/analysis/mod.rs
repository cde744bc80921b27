/// Data condensation for the sea-level pipeline.
///
/// Submodules:
/// - `annual` — collapses per-source observation series into one mean per
///   year, reconciling years covered by more than one mission.

pub mod annual;
