//! Cell-width helpers used by the terminal measurement backend and the recipient line widget.
//!
//! These helpers are pure (string in/number or string out) and live under `core` so widgets can
//! depend on them without importing the runtime.

pub mod clip;
pub mod width;
