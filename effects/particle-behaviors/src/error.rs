use std::io;
use thiserror::Error;

/// Error types for behavior construction and configuration loading
///
/// Every variant is raised before a behavior is registered. Init and update
/// passes never fail.
#[derive(Error, Debug)]
pub enum BehaviorError {
    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A keyframe list had no samples
    #[error("Keyframe list for '{property}' is empty")]
    EmptyCurve { property: &'static str },

    /// A keyframe value or time was NaN or infinite
    #[error("Keyframe {index} of '{property}' is not finite")]
    NonFiniteKeyframe {
        property: &'static str,
        index: usize,
    },

    /// A keyframe time fell outside the normalized lifetime range
    #[error("Keyframe {index} of '{property}' has time {time} outside [0, 1]")]
    TimeOutOfRange {
        property: &'static str,
        index: usize,
        time: f32,
    },

    /// Keyframe times decreased between two neighbours
    #[error(
        "Keyframe times for '{property}' are not ordered: key {index} at {time} follows {previous}"
    )]
    NonMonotonicTimes {
        property: &'static str,
        index: usize,
        previous: f32,
        time: f32,
    },

    /// A `{min, max}` pair was inverted or not finite
    #[error("Invalid range for '{field}': min {min} > max {max}")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    /// A scalar parameter was NaN or infinite
    #[error("Parameter '{field}' is not finite: {value}")]
    NonFiniteParameter { field: &'static str, value: f32 },

    /// A duration was negative or not finite
    #[error("Invalid duration for '{field}': {value}")]
    InvalidDuration { field: &'static str, value: f32 },

    /// No constructor is registered under the behavior type key
    #[error("Unknown behavior type: {0}")]
    UnknownBehavior(String),

    /// The registered behaviors need more per-particle scratch slots than exist
    #[error("Scratch slots exhausted: {requested} requested, {available} available")]
    ScratchExhausted { requested: usize, available: usize },

    /// The particle pool has fewer free slots than requested
    #[error("Particle pool exhausted: {requested} requested, {available} free")]
    PoolExhausted { requested: usize, available: usize },

    /// A behavior payload did not match the expected shape
    #[error("Invalid config for '{kind}': {source}")]
    InvalidConfig {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON configuration document failed to parse
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML configuration document failed to parse
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The configuration file extension is not a supported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Result type using BehaviorError
pub type Result<T> = std::result::Result<T, BehaviorError>;
