//! Individual particle representation

use glam::{Vec2, Vec3};

use super::scratch::Scratch;

/// A single particle in the pool
///
/// Behaviors write the animated fields in place. Age bookkeeping belongs to
/// the pool that owns the particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current age in seconds
    pub age: f32,
    /// Total lifespan in seconds
    pub max_life: f32,
    /// Age normalized by lifespan (0.0 to 1.0)
    pub age_percent: f32,
    /// Position relative to the emitter
    pub position: Vec2,
    /// Current scale (x, y)
    pub scale: Vec2,
    /// Opacity, 0.0 (transparent) to 1.0 (opaque)
    pub alpha: f32,
    /// RGB tint (0.0-1.0)
    pub tint: Vec3,
    /// Behavior-private values, indexed by assigned slot
    pub scratch: Scratch,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            age: 0.0,
            max_life: 1.0,
            age_percent: 0.0,
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            alpha: 1.0,
            tint: Vec3::ONE,
            scratch: Scratch::default(),
        }
    }
}

impl Particle {
    /// Create a fresh particle with the given lifespan
    pub fn new(max_life: f32) -> Self {
        Self {
            max_life,
            ..Self::default()
        }
    }

    /// Return the particle to its spawn state, reusing the slot
    pub fn reset(&mut self, max_life: f32) {
        *self = Self::new(max_life);
    }

    /// Check if the particle is still alive
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age < self.max_life
    }

    /// Recompute `age_percent` from `age` and `max_life`
    ///
    /// Ages outside `[0, max_life]` clamp; a zero lifespan counts as finished.
    #[inline]
    pub fn refresh_age_percent(&mut self) {
        self.age_percent = if self.max_life > 0.0 {
            (self.age / self.max_life).clamp(0.0, 1.0)
        } else {
            1.0
        };
    }

    /// Set both scale axes
    #[inline]
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec2::splat(scale);
    }
}
