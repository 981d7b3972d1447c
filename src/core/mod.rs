//! Host-independent core: measurement, fitting, and cell-width text helpers.

pub mod component;
pub mod error;
pub mod fit;
pub mod measure;
pub mod text;
