//! Emitter behaviors
//!
//! A behavior owns a little configuration (curves, ranges, durations) and
//! touches particles in two phases:
//!
//! - **init** runs once over the chain of freshly spawned particles
//! - **update** runs every frame over all live particles (optional)
//!
//! Behaviors of one emitter run in ascending [`BehaviorOrder`], ties in
//! registration order. A behavior that scales or offsets a value written by
//! another must sit in a later tier than the writer.
//!
//! The built-in behaviors are closed over by [`Behavior`]; hosts can add their
//! own through [`Behavior::Custom`] and the [`BehaviorRegistry`].

mod alpha;
mod color;
mod registry;
mod scale;
mod spawn;

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::particle::{Particle, ParticleId, ParticlePool, ScratchSlot};

pub use alpha::{
    AlphaBehavior, AlphaConfig, RangedAlphaBehavior, RangedAlphaConfig, StaticAlphaBehavior,
    StaticAlphaConfig,
};
pub use color::{ColorBehavior, ColorConfig};
pub use registry::{BehaviorConstructor, BehaviorRegistry, parse_config};
pub use scale::{ScaleBehavior, ScaleConfig, StaticScaleBehavior, StaticScaleConfig};
pub use spawn::{PointSpawnBehavior, PointSpawnConfig};

/// Execution tier of a behavior within one phase
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum BehaviorOrder {
    /// Placement of new particles; runs before anything that shapes them
    Spawn = 0,
    /// Ordinary property animation
    #[default]
    Normal = 2,
    /// Behaviors that consume values written by earlier tiers
    Late = 5,
}

impl fmt::Display for BehaviorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn => write!(f, "spawn"),
            Self::Normal => write!(f, "normal"),
            Self::Late => write!(f, "late"),
        }
    }
}

/// Contract between an emitter and one behavior
///
/// Both phases are total: configuration is validated when the behavior is
/// built, so nothing here can fail or allocate.
pub trait EmitterBehavior: fmt::Debug + Send + Sync {
    /// Configuration type key, e.g. `"alpha"`
    fn type_key(&self) -> &str;

    fn order(&self) -> BehaviorOrder;

    /// Number of per-particle scratch values this behavior needs
    fn scratch_slots(&self) -> usize {
        0
    }

    /// Receive the first of the scratch slots reserved for this behavior
    fn bind_scratch(&mut self, _first: ScratchSlot) {}

    /// Initialise every particle of the spawned chain starting at `head`
    fn init_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        rng: &mut dyn RngCore,
    );

    /// Whether the behavior animates particles after spawn
    fn has_update(&self) -> bool {
        false
    }

    /// Recompute animated properties of one particle
    fn update_particle(&self, _particle: &mut Particle, _delta_sec: f32) {}

    /// Update every particle of the live chain starting at `head`
    fn update_particles(&self, pool: &mut ParticlePool, head: Option<ParticleId>, delta_sec: f32) {
        pool.for_each_mut(head, |particle| self.update_particle(particle, delta_sec));
    }
}

/// Every behavior an emitter can run
#[derive(Debug)]
pub enum Behavior {
    Alpha(AlphaBehavior),
    AlphaStatic(StaticAlphaBehavior),
    AlphaRanged(RangedAlphaBehavior),
    Scale(ScaleBehavior),
    ScaleStatic(StaticScaleBehavior),
    Color(ColorBehavior),
    SpawnPoint(PointSpawnBehavior),
    /// Host-provided behavior
    Custom(Box<dyn EmitterBehavior>),
}

impl Behavior {
    fn as_dyn(&self) -> &dyn EmitterBehavior {
        match self {
            Self::Alpha(b) => b,
            Self::AlphaStatic(b) => b,
            Self::AlphaRanged(b) => b,
            Self::Scale(b) => b,
            Self::ScaleStatic(b) => b,
            Self::Color(b) => b,
            Self::SpawnPoint(b) => b,
            Self::Custom(b) => b.as_ref(),
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn EmitterBehavior {
        match self {
            Self::Alpha(b) => b,
            Self::AlphaStatic(b) => b,
            Self::AlphaRanged(b) => b,
            Self::Scale(b) => b,
            Self::ScaleStatic(b) => b,
            Self::Color(b) => b,
            Self::SpawnPoint(b) => b,
            Self::Custom(b) => b.as_mut(),
        }
    }
}

impl EmitterBehavior for Behavior {
    fn type_key(&self) -> &str {
        self.as_dyn().type_key()
    }

    fn order(&self) -> BehaviorOrder {
        self.as_dyn().order()
    }

    fn scratch_slots(&self) -> usize {
        self.as_dyn().scratch_slots()
    }

    fn bind_scratch(&mut self, first: ScratchSlot) {
        self.as_dyn_mut().bind_scratch(first);
    }

    fn init_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        rng: &mut dyn RngCore,
    ) {
        self.as_dyn().init_particles(pool, head, rng);
    }

    fn has_update(&self) -> bool {
        self.as_dyn().has_update()
    }

    fn update_particle(&self, particle: &mut Particle, delta_sec: f32) {
        self.as_dyn().update_particle(particle, delta_sec);
    }

    fn update_particles(&self, pool: &mut ParticlePool, head: Option<ParticleId>, delta_sec: f32) {
        self.as_dyn().update_particles(pool, head, delta_sec);
    }
}

impl From<Box<dyn EmitterBehavior>> for Behavior {
    fn from(behavior: Box<dyn EmitterBehavior>) -> Self {
        Self::Custom(behavior)
    }
}
