//! Platform-specific terminal integrations.

#[cfg(unix)]
pub mod resize_watch;

#[cfg(unix)]
pub use resize_watch::{
    terminal_columns, terminal_container_width, watch_terminal_resize, ResizeWatcher,
};
