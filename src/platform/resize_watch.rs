//! Terminal resize source (SIGWINCH). Unix only.

use std::thread::{self, JoinHandle};

use libc::{self, c_int};
use signal_hook::iterator::Signals;

use crate::core::error::WatchError;
use crate::runtime::resize::ResizeBus;

fn read_columns(fd: c_int) -> Option<u16> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: `size` is a valid, writable winsize for the duration of the call.
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };
    if result == 0 && size.ws_col > 0 {
        Some(size.ws_col)
    } else {
        None
    }
}

/// Current column count of the terminal on stdout, if stdout is a terminal.
pub fn terminal_columns() -> Option<u16> {
    read_columns(libc::STDOUT_FILENO)
}

/// Current terminal width converted to container pixels.
pub fn terminal_container_width(cell_width_px: f32) -> Option<f32> {
    terminal_columns().map(|cols| f32::from(cols) * cell_width_px)
}

/// Emits the terminal width on a [`ResizeBus`] whenever the terminal is resized.
///
/// Dropping the watcher unregisters the signal handler and joins its thread.
pub struct ResizeWatcher {
    handle: signal_hook::iterator::Handle,
    thread: Option<JoinHandle<()>>,
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

pub fn watch_terminal_resize(
    bus: &ResizeBus,
    cell_width_px: f32,
) -> Result<ResizeWatcher, WatchError> {
    if !(cell_width_px.is_finite() && cell_width_px > 0.0) {
        return Err(WatchError::InvalidCellWidth(cell_width_px));
    }

    let mut signals = Signals::new([libc::SIGWINCH]).map_err(WatchError::Register)?;
    let handle = signals.handle();
    let bus = bus.clone();

    let thread = thread::spawn(move || {
        for _ in signals.forever() {
            match terminal_container_width(cell_width_px) {
                Some(width) => {
                    let notified = bus.emit(width);
                    tracing::debug!(width, notified, "terminal resized");
                }
                None => tracing::trace!("SIGWINCH without a readable terminal size"),
            }
        }
    });

    Ok(ResizeWatcher {
        handle,
        thread: Some(thread),
    })
}
