//! Keyframe curve evaluation over normalized particle age

use super::types::{Keyframe, Lerp, ValueList};
use crate::error::{BehaviorError, Result};

/// Keys at or below this count are searched linearly
const LINEAR_SEARCH_MAX_KEYS: usize = 4;

/// Find the index of the latest keyframe whose time does not exceed `age`
///
/// The caller guarantees `keys` is non-empty and sorted by time. Ages before
/// the first key return 0. With duplicate times the later key wins, so the
/// returned key and its successor never share a time unless it is the last.
pub fn find_key_index<T>(keys: &[Keyframe<T>], age: f32) -> usize {
    if keys.len() <= LINEAR_SEARCH_MAX_KEYS {
        let mut index = 0;
        for (i, key) in keys.iter().enumerate().skip(1) {
            if key.time <= age {
                index = i;
            } else {
                break;
            }
        }
        return index;
    }

    keys.partition_point(|key| key.time <= age).saturating_sub(1)
}

/// Check a keyframe list before it becomes a curve
pub fn validate_keyframes<T: Lerp>(property: &'static str, keys: &[Keyframe<T>]) -> Result<()> {
    if keys.is_empty() {
        return Err(BehaviorError::EmptyCurve { property });
    }

    let mut previous = 0.0_f32;
    for (index, key) in keys.iter().enumerate() {
        if !key.time.is_finite() || !key.value.is_finite_value() {
            return Err(BehaviorError::NonFiniteKeyframe { property, index });
        }
        if !(0.0..=1.0).contains(&key.time) {
            return Err(BehaviorError::TimeOutOfRange {
                property,
                index,
                time: key.time,
            });
        }
        if index > 0 && key.time < previous {
            return Err(BehaviorError::NonMonotonicTimes {
                property,
                index,
                previous,
                time: key.time,
            });
        }
        previous = key.time;
    }

    Ok(())
}

/// An immutable keyframe curve sampled by normalized age
///
/// Ages at or before the first key return the first value and ages at or past
/// the last key return the last value. In between, the bracketing pair is
/// either blended linearly or, for stepped curves, the earlier value is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<T> {
    keys: Box<[Keyframe<T>]>,
    stepped: bool,
}

impl<T: Lerp> Curve<T> {
    /// Build a curve from samples already sorted by time
    pub fn new(keys: Vec<Keyframe<T>>, stepped: bool) -> Result<Self> {
        Self::named("keyframes", keys, stepped)
    }

    /// Build a curve, naming the animated property in validation errors
    pub fn named(property: &'static str, keys: Vec<Keyframe<T>>, stepped: bool) -> Result<Self> {
        validate_keyframes(property, &keys)?;
        Ok(Self {
            keys: keys.into_boxed_slice(),
            stepped,
        })
    }

    /// Build a curve from a configuration keyframe list
    pub fn from_value_list(property: &'static str, list: &ValueList<T>) -> Result<Self> {
        Self::named(property, list.list.clone(), list.is_stepped)
    }

    /// A single-key curve that always evaluates to `value`
    pub fn constant(property: &'static str, value: T) -> Result<Self> {
        Self::named(property, vec![Keyframe::new(value, 0.0)], false)
    }

    /// Sample the curve at a normalized age
    ///
    /// Defined for every input: values outside the key range clamp to the
    /// nearest end and NaN evaluates to the first value.
    pub fn interpolate(&self, age_percent: f32) -> T {
        let first = &self.keys[0];
        if !(age_percent > first.time) {
            return first.value;
        }

        let last = &self.keys[self.keys.len() - 1];
        if age_percent >= last.time {
            return last.value;
        }

        let index = find_key_index(&self.keys, age_percent);
        let a = &self.keys[index];
        if self.stepped || age_percent == a.time {
            return a.value;
        }

        let b = &self.keys[index + 1];
        let span = b.time - a.time;
        if span <= 0.0 {
            return b.value;
        }

        a.value.lerp(&b.value, (age_percent - a.time) / span)
    }

    /// Value of the first key, used to initialise freshly spawned particles
    #[inline]
    pub fn first_value(&self) -> T {
        self.keys[0].value
    }

    #[inline]
    pub fn last_value(&self) -> T {
        self.keys[self.keys.len() - 1].value
    }

    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; construction rejects empty key lists
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_stepped(&self) -> bool {
        self.stepped
    }
}
