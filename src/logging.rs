//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialize `env_logger` for the CLI
///
/// The level is `Info`, or `Debug` when `verbose` is set. A `RUST_LOG`
/// variable overrides it. Lines carry no timestamp, module path or target.
/// Calling this more than once leaves the first logger in place.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
