//! Velocity feedback from moving obstacles into the external fluid field.

use crate::core::vec2::Vec2;
use crate::domain::obstacle::Obstacle;

/// Obstacles slower than this contribute nothing (keeps negligible
/// injections out of the solver).
pub const MIN_INJECTION_SPEED: f32 = 0.001;

/// Influence footprint relative to the obstacle's larger half-extent.
pub const INJECTION_FOOTPRINT_SCALE: f32 = 1.5;

/// Fraction of the obstacle velocity handed to the fluid.
pub const INJECTION_VELOCITY_SCALE: f32 = 0.5;

/// Seam to the external fluid solver: one localized velocity contribution
/// with a falloff footprint.
pub trait FluidField {
    fn add_velocity(&mut self, pos: Vec2, footprint: Vec2, velocity: Vec2);
}

/// One qualifying obstacle's contribution for the tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityInjection {
    pub pos: Vec2,
    pub footprint: Vec2,
    pub velocity: Vec2,
}

/// Emit one injection per obstacle moving faster than the threshold.
/// Returns the number of injections issued.
pub fn emit_feedback(obstacles: &[Obstacle], field: &mut dyn FluidField) -> u32 {
    let mut issued = 0u32;
    for obstacle in obstacles {
        if obstacle.speed() <= MIN_INJECTION_SPEED {
            continue;
        }
        let reach = obstacle.size.x.max(obstacle.size.y) * INJECTION_FOOTPRINT_SCALE;
        field.add_velocity(
            obstacle.pos,
            Vec2::new(reach, reach),
            obstacle.vel * INJECTION_VELOCITY_SCALE,
        );
        issued += 1;
    }
    issued
}

/// Records injections for the WASM boundary (the JS side drains the
/// buffer once per tick and forwards it to the solver).
pub struct InjectionBuffer {
    injections: Vec<VelocityInjection>,
}

impl InjectionBuffer {
    pub fn new() -> Self {
        Self {
            injections: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.injections.clear();
    }

    pub fn as_slice(&self) -> &[VelocityInjection] {
        &self.injections
    }

    pub fn len(&self) -> usize {
        self.injections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.injections.is_empty()
    }
}

impl Default for InjectionBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FluidField for InjectionBuffer {
    fn add_velocity(&mut self, pos: Vec2, footprint: Vec2, velocity: Vec2) {
        self.injections.push(VelocityInjection {
            pos,
            footprint,
            velocity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::obstacle::ObstacleParams;

    fn moving_obstacle(vel: Vec2) -> Obstacle {
        let mut o = Obstacle::new(
            1,
            ObstacleParams {
                pos: Vec2::new(0.4, 0.6),
                size: Vec2::new(0.02, 0.04),
                mass: 1.0,
                friction: 0.95,
                restitution: 0.8,
            }
            .sanitized()
            .unwrap(),
        );
        o.vel = vel;
        o
    }

    #[test]
    fn fast_obstacle_injects_scaled_velocity() {
        let obstacles = vec![moving_obstacle(Vec2::new(0.2, -0.1))];
        let mut field = InjectionBuffer::new();
        assert_eq!(emit_feedback(&obstacles, &mut field), 1);

        let inj = field.as_slice()[0];
        assert_eq!(inj.pos, Vec2::new(0.4, 0.6));
        assert_eq!(inj.velocity, Vec2::new(0.1, -0.05));
        // Footprint follows the larger half-extent.
        assert!((inj.footprint.x - 0.06).abs() < 1e-6);
        assert_eq!(inj.footprint.x, inj.footprint.y);
    }

    #[test]
    fn slow_obstacle_is_filtered_out() {
        let obstacles = vec![
            moving_obstacle(Vec2::new(0.0005, 0.0)),
            moving_obstacle(Vec2::new(0.002, 0.0)),
        ];
        let mut field = InjectionBuffer::new();
        assert_eq!(emit_feedback(&obstacles, &mut field), 1);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn stationary_set_injects_nothing() {
        let obstacles = vec![moving_obstacle(Vec2::zero())];
        let mut field = InjectionBuffer::new();
        assert_eq!(emit_feedback(&obstacles, &mut field), 0);
        assert!(field.is_empty());
    }
}
