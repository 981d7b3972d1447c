//! Render recipients passed on the command line as a single terminal line.
//!
//! `cargo run --example recipients -- alice@example.com bob@example.com carol@example.com`
//!
//! Resize the terminal to watch the line refit; press Ctrl-C to quit.

use std::thread;
use std::time::Duration;

use recipient_line::{logging, Component, EnvConfig, RecipientLine, ResizeBus};

fn main() {
    let config = EnvConfig::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("logging disabled: {err}");
    }

    let recipients: Vec<String> = std::env::args().skip(1).collect();
    let cell_width_px = config.resolved_cell_width_px();
    let cols = recipient_line::terminal_columns().unwrap_or(80) as usize;

    let mut line = RecipientLine::from_config(&config);
    line.set_recipients(recipients);

    let bus = ResizeBus::new();
    let mut mounted = line.mount(&bus);
    let _watcher = match recipient_line::watch_terminal_resize(&bus, cell_width_px) {
        Ok(watcher) => Some(watcher),
        Err(err) => {
            eprintln!("resize tracking disabled: {err}");
            None
        }
    };

    let mut last_cols = 0;
    let mut current_cols = cols;
    loop {
        if current_cols != last_cols {
            for rendered in mounted.render(current_cols) {
                println!("{rendered}|");
            }
            last_cols = current_cols;
        }
        thread::sleep(Duration::from_millis(100));
        current_cols = recipient_line::terminal_columns()
            .map(usize::from)
            .unwrap_or(current_cols);
    }
}
