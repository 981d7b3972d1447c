//! Diagnostic logging.
//!
//! The library only emits `tracing` events. [`init`] is a convenience for binaries and demos
//! that want them on stderr or in a file when `RECIPIENT_LINE_DEBUG=1`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;
use crate::core::error::LoggingError;

pub const FILTER_VAR: &str = "RECIPIENT_LINE_LOG_FILTER";
const DEFAULT_FILTER: &str = "recipient_line=debug";

/// Install a global fmt subscriber when debug logging is enabled.
///
/// Returns `Ok(false)` when debug logging is off and nothing was installed.
pub fn init(config: &EnvConfig) -> Result<bool, LoggingError> {
    if !config.debug {
        return Ok(false);
    }

    let filter =
        EnvFilter::try_from_env(FILTER_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match config.log_file.as_deref() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::open_log_file(path, source))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|err| LoggingError::Install(err.to_string()))?;
    Ok(true)
}
