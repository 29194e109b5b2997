// src/logging/mod.rs
use std::env;

use log::LevelFilter;

/// Installs the global logger writing to stderr, so generated passwords on
/// stdout stay clean. `RUST_LOG`, when set, refines the configured level.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(env_logger::Target::Stderr);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
