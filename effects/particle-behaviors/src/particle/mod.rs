//! Particle records and the pool they live in
//!
//! # Architecture
//!
//! - `Particle`: mutable state written by behaviors (position, scale, alpha, tint)
//! - `ParticlePool`: fixed-capacity arena; sublists are chains of `ParticleId`
//! - `Scratch`: a few inline values per particle for behavior-private state,
//!   such as a random multiplier drawn once at spawn

mod particle;
mod pool;
mod scratch;

pub use particle::Particle;
pub use pool::{ParticleId, ParticlePool, SpawnedChain, SublistIter};
pub use scratch::{SCRATCH_CAPACITY, Scratch, ScratchAllocator, ScratchSlot};
