//! Random draws for per-particle modifiers
//!
//! Behaviors never own a random source. The caller injects any
//! [`rand::RngCore`] into each init pass, so seeded runs are reproducible.
//! Values drawn at spawn are stored in the particle's scratch slots and reused
//! by every later update; update passes take no generator at all.

use rand::{Rng, RngCore};

use crate::error::{BehaviorError, Result};

/// Random number generator state (simple LCG)
///
/// Small and fast enough to seed one per emitter.
#[derive(Debug, Clone)]
pub struct ParticleRng {
    state: u64,
}

impl ParticleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }
}

impl RngCore for ParticleRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        // Knuth's MMIX multiplier and increment
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst);
    }
}

/// Uniform value in `[min, max)`
///
/// An empty or inverted range yields `min`.
#[inline]
pub fn draw<R: RngCore + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if !(max > min) {
        return min;
    }
    let value = rng.random::<f32>().mul_add(max - min, min);
    if value < max { value } else { max.next_down() }
}

/// Whole number in `[min, max]`, both ends inclusive
///
/// Bounds are rounded inward to whole numbers first. When no whole number
/// lies in the range the result is `ceil(min)`; callers validate against that.
#[inline]
pub fn draw_int<R: RngCore + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let low = min.ceil();
    let high = max.floor();
    if !(high > low) {
        return low;
    }
    let value = rng.random::<f32>().mul_add(high - low + 1.0, low).floor();
    value.min(high)
}

/// A `[min, max)` range drawn once per particle and held for its life
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomMultiplier {
    min: f32,
    max: f32,
}

impl RandomMultiplier {
    /// Validate and build the range; `field` names it in errors
    pub fn new(field: &'static str, min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() {
            return Err(BehaviorError::NonFiniteParameter { field, value: min });
        }
        if !max.is_finite() {
            return Err(BehaviorError::NonFiniteParameter { field, value: max });
        }
        if min > max {
            return Err(BehaviorError::InvalidRange { field, min, max });
        }
        Ok(Self { min, max })
    }

    /// Always yields exactly `value`
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Draw the per-particle value
    ///
    /// Call this from init passes only; updates reuse the stored draw.
    #[inline]
    pub fn draw<R: RngCore + ?Sized>(&self, rng: &mut R) -> f32 {
        draw(rng, self.min, self.max)
    }
}
