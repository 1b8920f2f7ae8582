//! Value and keyframe types shared by property curves

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Trait for types that can be linearly interpolated
pub trait Lerp: Copy {
    /// Linear interpolation between self and other
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Whether every component is finite
    fn is_finite_value(&self) -> bool;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl Lerp for Vec2 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::lerp(*self, *other, t)
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl Lerp for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::lerp(*self, *other, t)
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl Lerp for Vec4 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec4::lerp(*self, *other, t)
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

/// A single `(value, time)` sample of a curve
///
/// `time` is a fraction of the particle lifetime in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<T> {
    pub value: T,
    pub time: f32,
}

impl<T> Keyframe<T> {
    pub const fn new(value: T, time: f32) -> Self {
        Self { value, time }
    }
}

/// Keyframe list as it appears in behavior configuration
///
/// ```json
/// { "list": [{"value": 0, "time": 0}, {"value": 1, "time": 0.25}], "isStepped": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueList<T> {
    pub list: Vec<Keyframe<T>>,
    #[serde(default)]
    pub is_stepped: bool,
}

impl<T> ValueList<T> {
    /// Smoothly interpolated list
    pub fn smooth(list: Vec<Keyframe<T>>) -> Self {
        Self {
            list,
            is_stepped: false,
        }
    }

    /// Stepped list
    pub fn stepped(list: Vec<Keyframe<T>>) -> Self {
        Self {
            list,
            is_stepped: true,
        }
    }
}
