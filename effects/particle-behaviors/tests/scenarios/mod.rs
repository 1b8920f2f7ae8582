//! End-to-end scenarios through the public API

mod behaviors;
mod curves;
mod ordering;
