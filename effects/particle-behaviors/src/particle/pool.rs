//! Fixed-capacity particle arena with index-linked sublists
//!
//! Particles live in one dense `Vec`. A parallel `next` array links them into
//! singly-linked chains by index: one chain of live particles, one free list,
//! and short-lived chains of freshly spawned particles waiting for their init
//! pass. Nothing here allocates after `with_capacity`.

use super::particle::Particle;
use crate::error::{BehaviorError, Result};

/// Index of a particle slot in a [`ParticlePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(u32);

impl ParticleId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A detached, terminated chain of newly spawned particles
///
/// Produced by [`ParticlePool::spawn`] and consumed by
/// [`ParticlePool::adopt`]. Walking from `head()` visits only the new
/// particles.
#[derive(Debug)]
#[must_use = "a spawned chain must be adopted into the live list"]
pub struct SpawnedChain {
    head: Option<ParticleId>,
    tail: Option<ParticleId>,
    len: usize,
}

impl SpawnedChain {
    pub fn head(&self) -> Option<ParticleId> {
        self.head
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Particle storage owned by an emitter
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    next: Vec<Option<ParticleId>>,
    free_head: Option<ParticleId>,
    free_count: usize,
    live_head: Option<ParticleId>,
    live_count: usize,
}

impl ParticlePool {
    /// Allocate every slot up front; all start on the free list
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(u32::MAX as usize);
        let next = (0..capacity)
            .map(|i| (i + 1 < capacity).then(|| ParticleId((i + 1) as u32)))
            .collect();

        Self {
            particles: vec![Particle::default(); capacity],
            next,
            free_head: (capacity > 0).then_some(ParticleId(0)),
            free_count: capacity,
            live_head: None,
            live_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn free_count(&self) -> usize {
        self.free_count
    }

    /// Head of the live sublist, `None` when no particle is alive
    pub fn live_head(&self) -> Option<ParticleId> {
        self.live_head
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index())
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(id.index())
    }

    /// Link following `id`
    pub fn next_of(&self, id: ParticleId) -> Option<ParticleId> {
        self.next.get(id.index()).copied().flatten()
    }

    /// Take `count` slots off the free list as a fresh, detached chain
    ///
    /// Each particle is reset to its spawn state with the given lifespan.
    pub fn spawn(&mut self, count: usize, max_life: f32) -> Result<SpawnedChain> {
        if count > self.free_count {
            return Err(BehaviorError::PoolExhausted {
                requested: count,
                available: self.free_count,
            });
        }

        let mut chain = SpawnedChain {
            head: None,
            tail: None,
            len: 0,
        };
        if count == 0 {
            return Ok(chain);
        }

        chain.head = self.free_head;
        let mut cursor = self.free_head;
        while let Some(id) = cursor {
            self.particles[id.index()].reset(max_life);
            chain.len += 1;
            if chain.len == count {
                chain.tail = Some(id);
                break;
            }
            cursor = self.next[id.index()];
        }

        if let Some(tail) = chain.tail {
            self.free_head = self.next[tail.index()].take();
        }
        self.free_count -= chain.len;

        Ok(chain)
    }

    /// Splice a spawned chain onto the front of the live list
    pub fn adopt(&mut self, chain: SpawnedChain) {
        let (Some(head), Some(tail)) = (chain.head, chain.tail) else {
            return;
        };
        self.next[tail.index()] = self.live_head;
        self.live_head = Some(head);
        self.live_count += chain.len;
    }

    /// Visit every particle of the sublist starting at `head`, in link order
    pub fn for_each(&self, head: Option<ParticleId>, mut f: impl FnMut(&Particle)) {
        let mut cursor = head;
        while let Some(id) = cursor {
            f(&self.particles[id.index()]);
            cursor = self.next[id.index()];
        }
    }

    /// Mutable visit of every particle of the sublist starting at `head`
    ///
    /// Each particle is visited exactly once. Links are not touched, so the
    /// closure cannot reorder or drop particles.
    pub fn for_each_mut(&mut self, head: Option<ParticleId>, mut f: impl FnMut(&mut Particle)) {
        let mut cursor = head;
        while let Some(id) = cursor {
            f(&mut self.particles[id.index()]);
            cursor = self.next[id.index()];
        }
    }

    /// Iterate a sublist by shared reference
    pub fn iter(&self, head: Option<ParticleId>) -> SublistIter<'_> {
        SublistIter { pool: self, cursor: head }
    }

    /// Iterate the live particles
    pub fn iter_live(&self) -> SublistIter<'_> {
        self.iter(self.live_head)
    }

    pub fn sublist_len(&self, head: Option<ParticleId>) -> usize {
        self.iter(head).count()
    }

    /// Age every live particle and recycle the ones past their lifespan
    ///
    /// Returns the number of particles moved to the free list.
    pub fn advance(&mut self, delta_sec: f32) -> usize {
        let mut expired = 0;
        let mut prev: Option<ParticleId> = None;
        let mut cursor = self.live_head;

        while let Some(id) = cursor {
            let next = self.next[id.index()];
            let particle = &mut self.particles[id.index()];
            particle.age += delta_sec;
            particle.refresh_age_percent();

            if particle.is_alive() {
                prev = Some(id);
            } else {
                match prev {
                    Some(p) => self.next[p.index()] = next,
                    None => self.live_head = next,
                }
                self.next[id.index()] = self.free_head;
                self.free_head = Some(id);
                self.free_count += 1;
                self.live_count -= 1;
                expired += 1;
            }
            cursor = next;
        }

        expired
    }
}

/// Shared iterator over one sublist
#[derive(Debug, Clone)]
pub struct SublistIter<'a> {
    pool: &'a ParticlePool,
    cursor: Option<ParticleId>,
}

impl<'a> Iterator for SublistIter<'a> {
    type Item = &'a Particle;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.pool.next[id.index()];
        Some(&self.pool.particles[id.index()])
    }
}
