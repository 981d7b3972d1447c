//! Fit an ordered list of recipients into one fixed-width line.
//!
//! Invariant: identifiers are shown whole or not at all; the only cut text is a lone first
//! recipient, and that cut is visual (see [`clip_to_cells`]), never part of a [`FitResult`].
//!
//! # Public API Overview
//! - Run a fitting pass with [`RecipientFitter::fit`] or [`fit_recipients`].
//! - Plug in width measurement through [`TextMeasurer`]; wrap a fallible backend in
//!   [`ResilientMeasurer`] to degrade to [`fallback_width`] instead of failing.
//! - Host the result in a terminal with [`RecipientLine`], and keep it in sync with container
//!   resizes by mounting it on a [`ResizeBus`].

pub mod config;
pub mod logging;

pub mod core;
pub mod platform;
pub mod runtime;
pub mod widgets;

/// Fitting pass and its result.
pub use crate::core::fit::{
    fit_recipients, BadgeMetrics, FitResult, RecipientFitter, ELLIPSIS, ELLIPSIS_MARKER,
    SEPARATOR,
};

/// Text measurement capability and built-in measurers.
pub use crate::core::measure::{
    fallback_width, CellBackend, FallbackMeasurer, MeasureBackend, MemoMeasurer,
    ResilientMeasurer, TextMeasurer, TextStyle,
};

/// Error types.
pub use crate::core::error::{LoggingError, MeasureError, WatchError};

/// Component trait.
pub use crate::core::component::Component;

/// Built-in widgets.
pub use crate::widgets::{FitTrigger, MountedRecipientLine, RecipientLine, TerminalMeasurer};

/// Resize notification.
pub use crate::runtime::resize::{ResizeBus, ResizeSubscription};

/// Terminal resize source.
#[cfg(unix)]
pub use crate::platform::{
    terminal_columns, terminal_container_width, watch_terminal_resize, ResizeWatcher,
};

/// Environment configuration.
pub use crate::config::EnvConfig;

/// Cell-width helpers.
pub use crate::core::text::clip::clip_to_cells;
pub use crate::core::text::width::{cell_width, grapheme_width};
