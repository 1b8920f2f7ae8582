//! Shared utilities for the particle-fx CLI

pub mod format;
pub mod table;

pub use format::*;
pub use table::*;
