//! Spawn placement behaviors

use glam::Vec2;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{BehaviorOrder, EmitterBehavior};
use crate::error::{BehaviorError, Result};
use crate::particle::{ParticleId, ParticlePool};
use crate::random::draw_int;

/// Configuration for [`PointSpawnBehavior`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointSpawnConfig {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

/// Places new particles at a whole-number offset inside a rectangle
///
/// Point emitters usually hand back a single particle per spawn; every
/// particle of the chain gets its own offset either way.
#[derive(Debug, Clone)]
pub struct PointSpawnBehavior {
    min: Vec2,
    max: Vec2,
}

impl PointSpawnBehavior {
    pub const TYPE: &'static str = "spawnPoint";

    pub fn new(config: &PointSpawnConfig) -> Result<Self> {
        check_axis("x", config.min_x, config.max_x)?;
        check_axis("y", config.min_y, config.max_y)?;
        Ok(Self {
            min: Vec2::new(config.min_x, config.min_y),
            max: Vec2::new(config.max_x, config.max_y),
        })
    }
}

fn check_axis(field: &'static str, min: f32, max: f32) -> Result<()> {
    for value in [min, max] {
        if !value.is_finite() {
            return Err(BehaviorError::NonFiniteParameter { field, value });
        }
    }
    // Positions are whole numbers, so the axis must hold at least one
    if min > max || min.ceil() > max.floor() {
        return Err(BehaviorError::InvalidRange { field, min, max });
    }
    Ok(())
}

impl EmitterBehavior for PointSpawnBehavior {
    fn type_key(&self) -> &str {
        Self::TYPE
    }

    fn order(&self) -> BehaviorOrder {
        BehaviorOrder::Spawn
    }

    fn init_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        rng: &mut dyn RngCore,
    ) {
        pool.for_each_mut(head, |particle| {
            particle.position = Vec2::new(
                draw_int(&mut *rng, self.min.x, self.max.x),
                draw_int(&mut *rng, self.min.y, self.max.y),
            );
        });
    }
}
