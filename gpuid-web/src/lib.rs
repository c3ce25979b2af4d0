pub mod gpuid_handler;

use gpuid_core::GpuidError;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;

/// Installs the global fmt subscriber and bridges `log` records into it.
/// Fails if logging was already set up in this process.
pub fn init_logging(log_level: tracing::Level) -> Result<(), GpuidError> {
    // stdout carries the generated records
    let subscriber = tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from_level(log_level))
        .finish();
    set_global_default(subscriber)
        .map_err(|err| GpuidError::Configuration(format!("cannot install subscriber: {}", err)))?;
    LogTracer::init()
        .map_err(|err| GpuidError::Configuration(format!("cannot bridge log records: {}", err)))
}
