//! Command implementations

pub mod curve;
pub mod simulate;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use particle_behaviors::{BehaviorRegistry, BehaviorSet, EmitterConfig};

/// Load a behavior file and build its behavior set with the built-in registry
pub(crate) fn load_behavior_set(file: &Path) -> Result<BehaviorSet> {
    let config = EmitterConfig::load(file)
        .with_context(|| format!("Failed to read behavior file: {}", file.display()))?;
    BehaviorSet::from_emitter_config(&BehaviorRegistry::builtin(), &config)
        .with_context(|| format!("Invalid behavior configuration in {}", file.display()))
}
