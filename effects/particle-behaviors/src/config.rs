//! Behavior configuration documents
//!
//! An emitter's behaviors are described as a list of `{ type, config }`
//! entries. The `type` key selects a constructor in the
//! [`BehaviorRegistry`](crate::behavior::BehaviorRegistry); `config` is handed
//! to it unparsed.
//!
//! ```yaml
//! behaviors:
//!   - type: alpha
//!     config:
//!       alpha:
//!         list:
//!           - { value: 0, time: 0 }
//!           - { value: 1, time: 0.25 }
//!           - { value: 0, time: 1 }
//!   - type: spawnPoint
//!     config: { minX: 0, maxX: 0, minY: 0, maxY: 0 }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BehaviorError, Result};

/// One behavior entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Registry key, e.g. `"alpha"` or `"scaleStatic"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Behavior-specific payload
    #[serde(default)]
    pub config: serde_json::Value,
}

impl BehaviorConfig {
    pub fn new(kind: impl Into<String>, config: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            config,
        }
    }
}

/// The full behavior list of one emitter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmitterConfig {
    #[serde(default)]
    pub behaviors: Vec<BehaviorConfig>,
}

impl EmitterConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Read a configuration file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let text = fs::read_to_string(path)?;
        let config = match extension.as_str() {
            "json" => Self::from_json_str(&text)?,
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            other => return Err(BehaviorError::UnsupportedFormat(other.to_string())),
        };

        debug!(
            "Loaded {} behavior entries from {}",
            config.behaviors.len(),
            path.display()
        );
        Ok(config)
    }
}
