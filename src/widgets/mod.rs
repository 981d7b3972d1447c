//! Widgets built on the fitter.

pub mod recipient_line;

pub use recipient_line::{FitTrigger, MountedRecipientLine, RecipientLine, TerminalMeasurer};
