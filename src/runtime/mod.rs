//! Host runtime plumbing shared by mounted components.

pub mod resize;
