// unveil/src/logger.rs
//! Logger setup for the `unveil` binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`. An explicit level overrides `RUST_LOG`; without
/// one, `RUST_LOG` applies and defaults to `warn`. Calling this more than once
/// is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.is_test(cfg!(test)).try_init();
}

/// The level implied by `--debug` and `--quiet`, if any.
pub fn level_from_flags(debug: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
