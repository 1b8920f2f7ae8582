//! Tint behavior

use glam::Vec3;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{BehaviorOrder, EmitterBehavior};
use crate::curve::{Curve, ValueList};
use crate::error::Result;
use crate::particle::{Particle, ParticleId, ParticlePool};

/// Configuration for [`ColorBehavior`]
///
/// ```json
/// { "color": { "list": [{"value": [1, 1, 1], "time": 0}, {"value": [1, 0.3, 0], "time": 1}] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// RGB tint (0.0-1.0 per channel) over particle life
    pub color: ValueList<Vec3>,
}

/// Animates the RGB tint along a keyframe curve
#[derive(Debug, Clone)]
pub struct ColorBehavior {
    list: Curve<Vec3>,
}

impl ColorBehavior {
    pub const TYPE: &'static str = "color";

    pub fn new(config: &ColorConfig) -> Result<Self> {
        Ok(Self {
            list: Curve::from_value_list("color", &config.color)?,
        })
    }
}

impl EmitterBehavior for ColorBehavior {
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
        let tint = self.list.first_value();
        pool.for_each_mut(head, |particle| particle.tint = tint);
    }

    fn has_update(&self) -> bool {
        true
    }

    #[inline]
    fn update_particle(&self, particle: &mut Particle, _delta_sec: f32) {
        particle.tint = self.list.interpolate(particle.age_percent);
    }
}
