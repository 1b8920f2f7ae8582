//! Property tests for curve evaluation and per-particle draws

mod curves;
mod draws;
