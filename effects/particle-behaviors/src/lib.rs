//! Keyframed property animation for particle emitters.
//!
//! A [`Curve`] maps a particle's normalized age to a value, either blending
//! linearly between keyframes or holding the latest one. Behaviors combine
//! curves with per-particle random draws and run in two phases over an
//! index-linked [`ParticlePool`]: once when particles spawn, then every frame.
//! A [`BehaviorSet`] keeps an emitter's behaviors in tier order and drives
//! both phases.
//!
//! # Examples
//!
//! ```
//! use particle_behaviors::{Curve, Keyframe};
//!
//! let fade = Curve::new(
//!     vec![
//!         Keyframe::new(0.0_f32, 0.0),
//!         Keyframe::new(1.0, 0.25),
//!         Keyframe::new(0.0, 1.0),
//!     ],
//!     false,
//! )
//! .unwrap();
//!
//! assert_eq!(fade.interpolate(0.25), 1.0);
//! assert_eq!(fade.interpolate(0.625), 0.5);
//! ```

pub mod behavior;
pub mod config;
pub mod curve;
pub mod dispatch;
pub mod error;
pub mod particle;
pub mod random;

pub use behavior::{Behavior, BehaviorOrder, BehaviorRegistry, EmitterBehavior};
pub use config::{BehaviorConfig, EmitterConfig};
pub use curve::{Curve, Keyframe, ValueList};
pub use dispatch::BehaviorSet;
pub use error::{BehaviorError, Result};
pub use particle::{Particle, ParticleId, ParticlePool};
pub use random::ParticleRng;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
