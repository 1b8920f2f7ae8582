//! Scale behaviors

use log::debug;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{BehaviorOrder, EmitterBehavior};
use crate::curve::{Curve, Keyframe, ValueList};
use crate::error::{BehaviorError, Result};
use crate::particle::{Particle, ParticleId, ParticlePool, ScratchSlot};
use crate::random::RandomMultiplier;

const fn default_min_mult() -> f32 {
    1.0
}

/// Configuration for [`ScaleBehavior`]
///
/// ```json
/// {
///     "scale": { "list": [{"value": 0, "time": 0}, {"value": 1, "time": 0.25}], "isStepped": true },
///     "minMult": 0.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleConfig {
    /// Scale over particle life, with a minimum value of 0
    pub scale: ValueList<f32>,
    /// Lower bound of the per-particle multiplier drawn in `[minMult, 1)`
    #[serde(default = "default_min_mult")]
    pub min_mult: f32,
}

/// Animates uniform scale along a curve, times a multiplier fixed at spawn
#[derive(Debug, Clone)]
pub struct ScaleBehavior {
    list: Curve<f32>,
    multiplier: RandomMultiplier,
    slot: ScratchSlot,
}

impl ScaleBehavior {
    pub const TYPE: &'static str = "scale";

    pub fn new(config: &ScaleConfig) -> Result<Self> {
        let list = Curve::from_value_list("scale", &config.scale)?;
        let multiplier = RandomMultiplier::new("minMult", config.min_mult, 1.0)?;
        debug!(
            "scale: {} keys, stepped={}, multiplier=[{}, 1)",
            list.len(),
            list.is_stepped(),
            config.min_mult
        );
        Ok(Self {
            list,
            multiplier,
            slot: ScratchSlot::default(),
        })
    }

    /// Scratch slot holding each particle's multiplier
    pub fn multiplier_slot(&self) -> ScratchSlot {
        self.slot
    }
}

impl EmitterBehavior for ScaleBehavior {
    fn type_key(&self) -> &str {
        Self::TYPE
    }

    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Normal
    }

    fn scratch_slots(&self) -> usize {
        1
    }

    fn bind_scratch(&mut self, first: ScratchSlot) {
        self.slot = first;
    }

    fn init_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        rng: &mut dyn RngCore,
    ) {
        let first = self.list.first_value();
        pool.for_each_mut(head, |particle| {
            let mult = self.multiplier.draw(&mut *rng);
            particle.scratch.set(self.slot, mult);
            particle.set_uniform_scale(first * mult);
        });
    }

    fn has_update(&self) -> bool {
        true
    }

    #[inline]
    fn update_particle(&self, particle: &mut Particle, _delta_sec: f32) {
        let mult = particle.scratch.get(self.slot);
        particle.set_uniform_scale(self.list.interpolate(particle.age_percent) * mult);
    }
}

/// Configuration for [`StaticScaleBehavior`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticScaleConfig {
    pub min: f32,
    pub max: f32,
    /// Seconds of particle age spent growing from 0 to the final scale
    #[serde(default)]
    pub scale_duration: f32,
    /// Skip the growth and spawn at the final scale
    #[serde(default)]
    pub is_spawn_fully_scaled: bool,
}

/// Picks a final scale in `[min, max)` at spawn, optionally growing into it
///
/// Growth is driven by raw age rather than life fraction, so it finishes
/// after `scaleDuration` seconds whatever the lifespan. Once that time has
/// passed the scale is left alone.
#[derive(Debug, Clone)]
pub struct StaticScaleBehavior {
    range: RandomMultiplier,
    growth: Curve<f32>,
    scale_duration: f32,
    is_spawn_fully_scaled: bool,
    slot: ScratchSlot,
}

impl StaticScaleBehavior {
    pub const TYPE: &'static str = "scaleStatic";

    pub fn new(config: &StaticScaleConfig) -> Result<Self> {
        let range = RandomMultiplier::new("scale", config.min, config.max)?;
        if !config.scale_duration.is_finite() || config.scale_duration < 0.0 {
            return Err(BehaviorError::InvalidDuration {
                field: "scaleDuration",
                value: config.scale_duration,
            });
        }
        let growth = Curve::named(
            "scaleDuration",
            vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)],
            false,
        )?;
        debug!(
            "scaleStatic: [{}, {}), duration={}s, fully_scaled={}",
            config.min, config.max, config.scale_duration, config.is_spawn_fully_scaled
        );
        Ok(Self {
            range,
            growth,
            scale_duration: config.scale_duration,
            is_spawn_fully_scaled: config.is_spawn_fully_scaled,
            slot: ScratchSlot::default(),
        })
    }

    /// Whether particles grow after spawn
    fn grows(&self) -> bool {
        !self.is_spawn_fully_scaled && self.scale_duration > 0.0
    }
}

impl EmitterBehavior for StaticScaleBehavior {
    fn type_key(&self) -> &str {
        Self::TYPE
    }

    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Normal
    }

    fn scratch_slots(&self) -> usize {
        usize::from(self.grows())
    }

    fn bind_scratch(&mut self, first: ScratchSlot) {
        self.slot = first;
    }

    fn init_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        rng: &mut dyn RngCore,
    ) {
        let grows = self.grows();
        pool.for_each_mut(head, |particle| {
            let final_scale = self.range.draw(&mut *rng);
            if grows {
                particle.scratch.set(self.slot, final_scale);
                particle.set_uniform_scale(0.0);
            } else {
                particle.set_uniform_scale(final_scale);
            }
        });
    }

    fn has_update(&self) -> bool {
        self.grows()
    }

    fn update_particle(&self, particle: &mut Particle, delta_sec: f32) {
        if !self.grows() {
            return;
        }
        // Growth already completed on an earlier frame
        if particle.age - delta_sec >= self.scale_duration {
            return;
        }
        let progress = self.growth.interpolate(particle.age / self.scale_duration);
        particle.set_uniform_scale(particle.scratch.get(self.slot) * progress);
    }
}
