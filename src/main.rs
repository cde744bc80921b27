use sealevel_pipeline::config::PipelineConfig;
use sealevel_pipeline::logging::{self, LogLevel, Stage};

/// Batch entry point. Takes an optional config-file path; with no argument
/// the defaults reproduce the historical file layout.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => PipelineConfig::load(&path)?,
        None => PipelineConfig::default(),
    };

    logging::init_logger(LogLevel::Info, config.log_file.as_deref());
    logging::info(Stage::System, "sea-level pipeline starting");

    if let Err(e) = sealevel_pipeline::run(&config) {
        logging::error(Stage::System, &format!("run aborted: {}", e));
        return Err(e.into());
    }

    logging::info(Stage::System, "sea-level pipeline finished");
    Ok(())
}
