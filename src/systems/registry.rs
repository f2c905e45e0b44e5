use crate::core::random;
use crate::core::vec2::Vec2;
use crate::domain::obstacle::{Obstacle, ObstacleId, ObstacleParams};

/// Number of bodies seeded by `reset()`.
pub const RESET_SEED_COUNT: usize = 15;

/// Owns the live obstacle set and allocates ids.
///
/// `all_mut()` hands out the working set for in-place mutation during a
/// tick; the set itself must not grow or shrink while a tick is running.
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
    next_id: ObstacleId,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a body with the next sequential id and zero velocity.
    ///
    /// Returns `None` when the params fail validation (see
    /// `ObstacleParams::sanitized`). Capacity limits are the caller's
    /// concern, not the registry's.
    pub fn create(&mut self, params: ObstacleParams) -> Option<ObstacleId> {
        let params = params.sanitized()?;
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.obstacles.push(Obstacle::new(id, params));
        Some(id)
    }

    /// Remove the first obstacle whose id matches. No-op if absent.
    pub fn remove(&mut self, id: ObstacleId) -> bool {
        if let Some(idx) = self.obstacles.iter().position(|o| o.id == id) {
            self.obstacles.remove(idx);
            return true;
        }
        false
    }

    /// Empty the set and restart the id sequence.
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.next_id = 1;
    }

    /// Clear, then reseed with a fresh random population: positions in
    /// [0.2, 0.8] per axis, square sizes of 0.015 plus up to 0.01
    /// variation, masses in [1.0, 1.5].
    pub fn reset(&mut self, rng_state: &mut u32) {
        self.clear();
        for _ in 0..RESET_SEED_COUNT {
            let pos = Vec2::new(
                random::next_unit(rng_state) * 0.6 + 0.2,
                random::next_unit(rng_state) * 0.6 + 0.2,
            );
            let side = 0.015 + random::next_unit(rng_state) * 0.01;
            let params = ObstacleParams {
                pos,
                size: Vec2::new(side, side),
                mass: 1.0 + random::next_unit(rng_state) * 0.5,
                friction: 0.95,
                restitution: 0.8,
            };
            // Seed params are always in range.
            self.create(params);
        }
    }

    pub fn all(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn all_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl Default for ObstacleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_at(x: f32, y: f32) -> ObstacleParams {
        ObstacleParams {
            pos: Vec2::new(x, y),
            size: Vec2::new(0.02, 0.02),
            mass: 1.0,
            friction: 0.95,
            restitution: 0.8,
        }
    }

    #[test]
    fn ids_are_sequential_and_never_recycled() {
        let mut reg = ObstacleRegistry::new();
        let a = reg.create(params_at(0.3, 0.3)).unwrap();
        let b = reg.create(params_at(0.7, 0.7)).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);

        assert!(reg.remove(a));
        let c = reg.create(params_at(0.5, 0.5)).unwrap();
        assert_eq!(c, 3);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut reg = ObstacleRegistry::new();
        reg.create(params_at(0.5, 0.5)).unwrap();
        assert!(!reg.remove(42));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn create_rejects_invalid_params() {
        let mut reg = ObstacleRegistry::new();
        let bad = ObstacleParams { mass: 0.0, ..params_at(0.5, 0.5) };
        assert!(reg.create(bad).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn clear_restarts_the_id_sequence() {
        let mut reg = ObstacleRegistry::new();
        reg.create(params_at(0.5, 0.5)).unwrap();
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.create(params_at(0.5, 0.5)).unwrap(), 1);
    }

    #[test]
    fn reset_seeds_a_population_within_bounds() {
        let mut reg = ObstacleRegistry::new();
        let mut rng = 12345u32;
        reg.reset(&mut rng);
        assert_eq!(reg.len(), RESET_SEED_COUNT);
        for o in reg.all() {
            assert!((0.2..=0.8).contains(&o.pos.x));
            assert!((0.2..=0.8).contains(&o.pos.y));
            assert!((1.0..=1.5).contains(&o.mass));
            assert!(o.size.x >= 0.015 && o.size.x <= 0.025);
            assert_eq!(o.vel, Vec2::zero());
        }
    }
}
