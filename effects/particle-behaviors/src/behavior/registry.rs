//! String-keyed behavior construction

use std::collections::HashMap;

use log::debug;
use serde::de::DeserializeOwned;

use super::{
    AlphaBehavior, Behavior, ColorBehavior, EmitterBehavior, PointSpawnBehavior,
    RangedAlphaBehavior, ScaleBehavior, StaticAlphaBehavior, StaticScaleBehavior,
};
use crate::config::BehaviorConfig;
use crate::error::{BehaviorError, Result};

/// Builds a behavior from its raw `config` payload
pub type BehaviorConstructor = fn(serde_json::Value) -> Result<Behavior>;

/// Lookup table from configuration `type` key to constructor
#[derive(Debug, Clone, Default)]
pub struct BehaviorRegistry {
    constructors: HashMap<String, BehaviorConstructor>,
}

impl BehaviorRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in behavior
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(AlphaBehavior::TYPE, |value| {
            Ok(Behavior::Alpha(AlphaBehavior::new(&parse_config(
                AlphaBehavior::TYPE,
                value,
            )?)?))
        });
        registry.register(StaticAlphaBehavior::TYPE, |value| {
            Ok(Behavior::AlphaStatic(StaticAlphaBehavior::new(
                &parse_config(StaticAlphaBehavior::TYPE, value)?,
            )?))
        });
        registry.register(RangedAlphaBehavior::TYPE, |value| {
            Ok(Behavior::AlphaRanged(RangedAlphaBehavior::new(
                &parse_config(RangedAlphaBehavior::TYPE, value)?,
            )?))
        });
        registry.register(ScaleBehavior::TYPE, |value| {
            Ok(Behavior::Scale(ScaleBehavior::new(&parse_config(
                ScaleBehavior::TYPE,
                value,
            )?)?))
        });
        registry.register(StaticScaleBehavior::TYPE, |value| {
            Ok(Behavior::ScaleStatic(StaticScaleBehavior::new(
                &parse_config(StaticScaleBehavior::TYPE, value)?,
            )?))
        });
        registry.register(ColorBehavior::TYPE, |value| {
            Ok(Behavior::Color(ColorBehavior::new(&parse_config(
                ColorBehavior::TYPE,
                value,
            )?)?))
        });
        registry.register(PointSpawnBehavior::TYPE, |value| {
            Ok(Behavior::SpawnPoint(PointSpawnBehavior::new(
                &parse_config(PointSpawnBehavior::TYPE, value)?,
            )?))
        });
        registry
    }

    /// Add a constructor, replacing any previous entry under the same key
    pub fn register(&mut self, key: impl Into<String>, constructor: BehaviorConstructor) {
        let key = key.into();
        if self.constructors.insert(key.clone(), constructor).is_some() {
            debug!("Replaced behavior constructor '{key}'");
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.constructors.contains_key(key)
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Construct the behavior named by `entry.kind`
    pub fn create(&self, entry: &BehaviorConfig) -> Result<Behavior> {
        let constructor = self
            .constructors
            .get(&entry.kind)
            .ok_or_else(|| BehaviorError::UnknownBehavior(entry.kind.clone()))?;
        let behavior = constructor(entry.config.clone())?;
        debug!(
            "Constructed '{}' behavior ({} tier)",
            entry.kind,
            behavior.order()
        );
        Ok(behavior)
    }
}

/// Deserialize a behavior payload, tagging failures with the behavior key
pub fn parse_config<C: DeserializeOwned>(kind: &str, value: serde_json::Value) -> Result<C> {
    serde_json::from_value(value).map_err(|source| BehaviorError::InvalidConfig {
        kind: kind.to_string(),
        source,
    })
}
