//! Ordered execution of an emitter's behaviors
//!
//! [`BehaviorSet`] keeps behaviors sorted by [`BehaviorOrder`] with ties in
//! registration order, hands out scratch slots as behaviors arrive, and runs
//! the init and update phases over pool sublists.
//!
//! ```
//! use particle_behaviors::{BehaviorRegistry, BehaviorSet, EmitterConfig, ParticlePool, ParticleRng};
//!
//! let config = EmitterConfig::from_json_str(r#"{
//!     "behaviors": [
//!         { "type": "alphaStatic", "config": { "value": 0.5 } },
//!         { "type": "spawnPoint", "config": { "minX": 0, "maxX": 0, "minY": 0, "maxY": 0 } }
//!     ]
//! }"#).unwrap();
//! let set = BehaviorSet::from_emitter_config(&BehaviorRegistry::builtin(), &config).unwrap();
//!
//! let mut pool = ParticlePool::with_capacity(16);
//! let mut rng = ParticleRng::new(7);
//! set.spawn(&mut pool, 4, 1.0, &mut rng).unwrap();
//! set.step(&mut pool, 0.1);
//! assert_eq!(pool.live_count(), 4);
//! assert!(pool.iter_live().all(|p| p.alpha == 0.5));
//! ```

use log::{Level, debug, log_enabled, trace};
use rand::RngCore;

use crate::behavior::{Behavior, BehaviorRegistry, EmitterBehavior};
use crate::config::{BehaviorConfig, EmitterConfig};
use crate::error::Result;
use crate::particle::{ParticleId, ParticlePool, ScratchAllocator};

/// The behaviors of one emitter, in execution order
#[derive(Debug, Default)]
pub struct BehaviorSet {
    behaviors: Vec<Behavior>,
    scratch: ScratchAllocator,
}

impl BehaviorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from configuration entries, in listed order
    pub fn from_configs(registry: &BehaviorRegistry, configs: &[BehaviorConfig]) -> Result<Self> {
        let mut set = Self::new();
        for entry in configs {
            set.push(registry.create(entry)?)?;
        }
        Ok(set)
    }

    pub fn from_emitter_config(registry: &BehaviorRegistry, config: &EmitterConfig) -> Result<Self> {
        Self::from_configs(registry, &config.behaviors)
    }

    /// Register a behavior
    ///
    /// Scratch slots are reserved before insertion, so a behavior that does
    /// not fit leaves the set unchanged. The behavior lands after every
    /// behavior of the same or an earlier tier.
    pub fn push(&mut self, behavior: impl Into<Behavior>) -> Result<()> {
        let mut behavior = behavior.into();
        let slots = behavior.scratch_slots();
        if slots > 0 {
            let first = self.scratch.allocate(slots)?;
            behavior.bind_scratch(first);
            debug!(
                "Bound {} scratch slot(s) from {} to '{}'",
                slots,
                first.index(),
                behavior.type_key()
            );
        }

        let order = behavior.order();
        let position = self.behaviors.partition_point(|b| b.order() <= order);
        debug!(
            "Registered '{}' at position {} ({} tier)",
            behavior.type_key(),
            position,
            order
        );
        self.behaviors.insert(position, behavior);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Behaviors in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, Behavior> {
        self.behaviors.iter()
    }

    /// Scratch slots reserved so far
    pub fn scratch_used(&self) -> usize {
        self.scratch.used()
    }

    /// Run every init pass over the sublist starting at `head`
    pub fn init_particles<R: RngCore>(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        rng: &mut R,
    ) {
        if log_enabled!(Level::Trace) {
            trace!(
                "init {} behavior(s) over {} particle(s)",
                self.behaviors.len(),
                pool.sublist_len(head)
            );
        }
        for behavior in &self.behaviors {
            trace!("init '{}'", behavior.type_key());
            behavior.init_particles(pool, head, rng);
        }
    }

    /// Run the update pass of every animating behavior over the sublist
    pub fn update_particles(
        &self,
        pool: &mut ParticlePool,
        head: Option<ParticleId>,
        delta_sec: f32,
    ) {
        for behavior in self.behaviors.iter().filter(|b| b.has_update()) {
            trace!("update '{}' dt={}", behavior.type_key(), delta_sec);
            behavior.update_particles(pool, head, delta_sec);
        }
    }

    /// Spawn `count` particles, initialise them and make them live
    ///
    /// Returns the number of particles spawned.
    pub fn spawn<R: RngCore>(
        &self,
        pool: &mut ParticlePool,
        count: usize,
        max_life: f32,
        rng: &mut R,
    ) -> Result<usize> {
        let chain = pool.spawn(count, max_life)?;
        let spawned = chain.len();
        self.init_particles(pool, chain.head(), rng);
        pool.adopt(chain);
        Ok(spawned)
    }

    /// Advance one frame: age live particles, recycle the expired ones and
    /// run the update passes over the survivors
    ///
    /// Returns the number of particles that expired.
    pub fn step(&self, pool: &mut ParticlePool, delta_sec: f32) -> usize {
        let expired = pool.advance(delta_sec);
        let head = pool.live_head();
        self.update_particles(pool, head, delta_sec);
        expired
    }
}
