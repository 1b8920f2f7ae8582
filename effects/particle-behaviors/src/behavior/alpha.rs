//! Opacity behaviors

use log::debug;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{BehaviorOrder, EmitterBehavior};
use crate::curve::{Curve, ValueList};
use crate::error::{BehaviorError, Result};
use crate::particle::{Particle, ParticleId, ParticlePool};
use crate::random::RandomMultiplier;

/// Configuration for [`AlphaBehavior`]
///
/// ```json
/// { "alpha": { "list": [{"value": 0, "time": 0}, {"value": 1, "time": 0.25}, {"value": 0, "time": 1}] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaConfig {
    /// Transparency from 0 (transparent) to 1 (opaque) over particle life
    pub alpha: ValueList<f32>,
}

/// Animates opacity along a keyframe curve over the particle's life
#[derive(Debug, Clone)]
pub struct AlphaBehavior {
    list: Curve<f32>,
}

impl AlphaBehavior {
    pub const TYPE: &'static str = "alpha";

    pub fn new(config: &AlphaConfig) -> Result<Self> {
        let list = Curve::from_value_list("alpha", &config.alpha)?;
        debug!(
            "alpha: {} keys, stepped={}",
            list.len(),
            list.is_stepped()
        );
        Ok(Self { list })
    }
}

impl EmitterBehavior for AlphaBehavior {
    fn type_key(&self) -> &str {
        Self::TYPE
    }

    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Normal
    }

    fn init_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        _rng: &mut dyn RngCore,
    ) {
        let alpha = self.list.first_value();
        pool.for_each_mut(head, |particle| particle.alpha = alpha);
    }

    fn has_update(&self) -> bool {
        true
    }

    #[inline]
    fn update_particle(&self, particle: &mut Particle, _delta_sec: f32) {
        particle.alpha = self.list.interpolate(particle.age_percent);
    }
}

/// Configuration for [`StaticAlphaBehavior`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticAlphaConfig {
    /// Transparency from 0 (transparent) to 1 (opaque)
    pub value: f32,
}

/// Applies one fixed opacity at spawn
#[derive(Debug, Clone)]
pub struct StaticAlphaBehavior {
    value: f32,
}

impl StaticAlphaBehavior {
    pub const TYPE: &'static str = "alphaStatic";

    pub fn new(config: &StaticAlphaConfig) -> Result<Self> {
        if !config.value.is_finite() {
            return Err(BehaviorError::NonFiniteParameter {
                field: "value",
                value: config.value,
            });
        }
        Ok(Self {
            value: config.value,
        })
    }
}

impl EmitterBehavior for StaticAlphaBehavior {
    fn type_key(&self) -> &str {
        Self::TYPE
    }

    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Normal
    }

    fn init_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        _rng: &mut dyn RngCore,
    ) {
        let value = self.value;
        pool.for_each_mut(head, |particle| particle.alpha = value);
    }
}

/// Configuration for [`RangedAlphaBehavior`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangedAlphaConfig {
    pub min: f32,
    pub max: f32,
}

/// Picks a random opacity in `[min, max)` for each particle at spawn
#[derive(Debug, Clone)]
pub struct RangedAlphaBehavior {
    range: RandomMultiplier,
}

impl RangedAlphaBehavior {
    pub const TYPE: &'static str = "alphaRanged";

    pub fn new(config: &RangedAlphaConfig) -> Result<Self> {
        let range = RandomMultiplier::new("alpha", config.min, config.max)?;
        Ok(Self { range })
    }
}

impl EmitterBehavior for RangedAlphaBehavior {
    fn type_key(&self) -> &str {
        Self::TYPE
    }

    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Normal
    }

    fn init_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        rng: &mut dyn RngCore,
    ) {
        let range = self.range;
        pool.for_each_mut(head, |particle| particle.alpha = range.draw(&mut *rng));
    }
}
