//! Logging setup for the command-line frontend.
//!
//! Progress lines and the startup banner all go through `log`, so the
//! renderer itself never touches stderr directly.

use log::LevelFilter;

/// Initialize `env_logger` with the level chosen on the command line.
///
/// Per-module directives from `RUST_LOG` are read first; the CLI level then
/// sets the overall filter.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
