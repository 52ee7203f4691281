//! Logging utilities
//!
//! Provides logging setup for the command-line tool. The library itself only
//! emits through the `log` facade.

use env_logger::Env;

/// Setup logging, defaulting to `info` unless `RUST_LOG` says otherwise
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
