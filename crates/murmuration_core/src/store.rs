//! Double-buffered agent state.
//!
//! `current` is the published frame: read by the kernel as its source and by
//! renderers. `next` is the kernel's write target and is fully overwritten
//! every frame. Roles swap by exchanging the two `Vec` headers, never by
//! copying agent data.

use murmuration_data::Boid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct AgentStore {
    current: Vec<Boid>,
    next: Vec<Boid>,
    domain_size: f32,
}

impl AgentStore {
    /// Creates a store of `agents` boids at rest at the origin.
    ///
    /// # Panics
    /// If `agents` is zero or `domain_size` is not positive.
    #[must_use]
    pub fn new(agents: usize, domain_size: f32) -> Self {
        assert!(agents > 0, "agent store needs at least one agent");
        assert!(domain_size > 0.0, "domain size must be positive");
        Self {
            current: vec![Boid::default(); agents],
            next: vec![Boid::default(); agents],
            domain_size,
        }
    }

    /// Builds a store whose current buffer holds exactly `boids`.
    ///
    /// # Panics
    /// If `boids` is empty or `domain_size` is not positive.
    #[must_use]
    pub fn from_boids(boids: Vec<Boid>, domain_size: f32) -> Self {
        assert!(!boids.is_empty(), "agent store needs at least one agent");
        assert!(domain_size > 0.0, "domain size must be positive");
        let next = boids.clone();
        Self {
            current: boids,
            next,
            domain_size,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    #[must_use]
    pub fn domain_size(&self) -> f32 {
        self.domain_size
    }

    /// The published buffer.
    #[must_use]
    pub fn current(&self) -> &[Boid] {
        &self.current
    }

    /// Mutable access to the published buffer, for placing agents between
    /// frames.
    pub fn current_mut(&mut self) -> &mut [Boid] {
        &mut self.current
    }

    /// The buffer written by the last completed update before it was swapped
    /// out, or scratch data.
    #[must_use]
    pub fn next(&self) -> &[Boid] {
        &self.next
    }

    /// Read source and write target for one update.
    pub fn split(&mut self) -> (&[Boid], &mut [Boid]) {
        (&self.current, &mut self.next)
    }

    /// Exchanges the roles of the two buffers.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Scatters every agent uniformly over the domain and stops it.
    ///
    /// Derived render fields are cleared; the caller republishes them.
    pub fn respawn(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let size = self.domain_size;
        for boid in &mut self.current {
            *boid = Boid::at(rng.gen_range(0.0..size), rng.gen_range(0.0..size));
        }
        self.next.copy_from_slice(&self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_exchanges_without_copy() {
        let mut store = AgentStore::new(8, 100.0);
        let cur = store.current().as_ptr();
        let nxt = store.next().as_ptr();
        store.swap();
        assert_eq!(store.current().as_ptr(), nxt);
        assert_eq!(store.next().as_ptr(), cur);
    }

    #[test]
    fn test_swap_twice_restores_roles() {
        let mut store = AgentStore::from_boids(vec![Boid::at(1.0, 2.0)], 100.0);
        store.current_mut()[0].vx = 5.0;
        let cur = store.current().as_ptr();
        store.swap();
        store.swap();
        assert_eq!(store.current().as_ptr(), cur);
        assert_eq!(store.current()[0].vx, 5.0);
    }

    #[test]
    fn test_respawn_in_domain_and_at_rest() {
        let mut store = AgentStore::new(500, 100.0);
        store.current_mut()[3].vx = 9.0;
        store.respawn(7);
        for b in store.current() {
            assert!((0.0..100.0).contains(&b.x));
            assert!((0.0..100.0).contains(&b.y));
            assert_eq!(b.vx, 0.0);
            assert_eq!(b.vy, 0.0);
        }
        assert_eq!(store.current(), store.next());
    }

    #[test]
    fn test_respawn_is_seed_deterministic() {
        let mut a = AgentStore::new(64, 10_000.0);
        let mut b = AgentStore::new(64, 10_000.0);
        a.respawn(42);
        b.respawn(42);
        assert_eq!(a.current(), b.current());
        b.respawn(43);
        assert_ne!(a.current(), b.current());
    }

    #[test]
    #[should_panic(expected = "at least one agent")]
    fn test_zero_agents_panics() {
        let _ = AgentStore::new(0, 100.0);
    }
}
