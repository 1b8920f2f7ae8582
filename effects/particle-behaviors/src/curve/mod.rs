//! Keyframed property curves
//!
//! A curve is an ordered, immutable list of `(value, time)` samples where time
//! is a fraction of particle lifetime. Curves are built once when a behavior is
//! constructed and only read afterwards, so one curve may be shared by any
//! number of emitters.
//!
//! # Example
//!
//! ```rust
//! use particle_behaviors::curve::{Curve, Keyframe};
//!
//! let alpha = Curve::new(
//!     vec![
//!         Keyframe::new(0.0_f32, 0.0),
//!         Keyframe::new(1.0, 0.25),
//!         Keyframe::new(0.0, 1.0),
//!     ],
//!     false,
//! )?;
//!
//! assert_eq!(alpha.interpolate(0.25), 1.0);
//! assert_eq!(alpha.interpolate(0.625), 0.5);
//! # Ok::<(), particle_behaviors::BehaviorError>(())
//! ```

mod interpolation;
mod types;

pub use interpolation::{Curve, find_key_index, validate_keyframes};
pub use types::{Keyframe, Lerp, ValueList};
