//! Fixed per-particle scratch storage for behavior-private values

use crate::error::{BehaviorError, Result};

/// Number of scratch values each particle carries
pub const SCRATCH_CAPACITY: usize = 4;

/// Index of one scratch value, assigned to a behavior at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScratchSlot(u8);

impl ScratchSlot {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Inline scratch values; never allocates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scratch([f32; SCRATCH_CAPACITY]);

impl Scratch {
    #[inline]
    pub fn get(&self, slot: ScratchSlot) -> f32 {
        self.0[slot.index()]
    }

    #[inline]
    pub fn set(&mut self, slot: ScratchSlot, value: f32) {
        self.0[slot.index()] = value;
    }

    pub fn clear(&mut self) {
        self.0 = [0.0; SCRATCH_CAPACITY];
    }
}

/// Hands out consecutive scratch slots while a behavior set is assembled
#[derive(Debug, Clone, Default)]
pub struct ScratchAllocator {
    used: usize,
}

impl ScratchAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `count` consecutive slots, returning the first
    pub fn allocate(&mut self, count: usize) -> Result<ScratchSlot> {
        let available = SCRATCH_CAPACITY - self.used;
        if count > available {
            return Err(BehaviorError::ScratchExhausted {
                requested: count,
                available,
            });
        }
        let first = ScratchSlot(self.used as u8);
        self.used += count;
        Ok(first)
    }

    pub fn used(&self) -> usize {
        self.used
    }
}
