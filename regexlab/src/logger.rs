// regexlab/src/logger.rs
//! env_logger-backed logging setup for the CLI.

use log::LevelFilter;

/// Initializes the global logger. `RUST_LOG` is honored; an explicit level
/// from the CLI flags overrides it. Safe to call more than once (later calls
/// are no-ops).
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
