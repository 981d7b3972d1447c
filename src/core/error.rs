use std::path::PathBuf;

use thiserror::Error;

/// Failure of a real measurement backend.
///
/// Never surfaces from a fitting pass: [`crate::core::measure::ResilientMeasurer`] degrades
/// to the fallback formula instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("no rendering context is available for text measurement")]
    Unavailable,

    #[error("font size must be a positive finite number of pixels, got {font_size}")]
    InvalidFontSize { font_size: f32 },

    #[error("backend returned unusable width {width} for {text:?}")]
    InvalidWidth { text: String, width: f32 },
}

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("failed to register SIGWINCH handler: {0}")]
    Register(#[source] std::io::Error),

    #[error("cell width must be a positive finite number of pixels, got {0}")]
    InvalidCellWidth(f32),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("I/O error while opening log file at {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

impl LoggingError {
    #[must_use]
    pub fn open_log_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenLogFile {
            path: path.into(),
            source,
        }
    }
}
