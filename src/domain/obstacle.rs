use crate::core::vec2::Vec2;

pub type ObstacleId = u32;

/// Movable, mass-bearing body - collides with pointer points, other
/// obstacles and the domain boundary
pub struct Obstacle {
    /// Unique ID, monotonically increasing, never recycled
    pub id: ObstacleId,
    /// Center position in normalized [0,1] domain coordinates
    pub pos: Vec2,
    /// Velocity (normalized units per second)
    pub vel: Vec2,
    /// Size pair (width, height); half of each axis is the boundary
    /// half-extent
    pub size: Vec2,
    /// Total mass, strictly positive
    pub mass: f32,
    /// Per-tick velocity damping factor (1 = no damping, 0 = instant stop)
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl Obstacle {
    pub(crate) fn new(id: ObstacleId, params: ObstacleParams) -> Self {
        Self {
            id,
            pos: params.pos,
            vel: Vec2::zero(),
            size: params.size,
            mass: params.mass,
            friction: params.friction,
            restitution: params.restitution,
        }
    }

    /// Effective collision radius, one convention for detection and
    /// resolution alike.
    #[inline]
    pub fn radius(&self) -> f32 {
        (self.size.x + self.size.y) * 0.5
    }

    /// Per-axis boundary half-extent.
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Construction input for an obstacle.
///
/// `sanitized()` is the single validation gate: friction and restitution
/// are clamped into [0,1]; non-finite components, non-positive mass or
/// non-positive size reject the whole set. Division by mass downstream
/// makes a zero mass a hard precondition failure, so it is never defaulted.
#[derive(Clone, Copy, Debug)]
pub struct ObstacleParams {
    pub pos: Vec2,
    pub size: Vec2,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl ObstacleParams {
    pub fn sanitized(self) -> Option<Self> {
        if !self.pos.is_finite() || !self.size.is_finite() {
            return None;
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return None;
        }
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return None;
        }
        if !self.friction.is_finite() || !self.restitution.is_finite() {
            return None;
        }
        Some(Self {
            friction: self.friction.clamp(0.0, 1.0),
            restitution: self.restitution.clamp(0.0, 1.0),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> ObstacleParams {
        ObstacleParams {
            pos: Vec2::new(0.5, 0.5),
            size: Vec2::new(0.02, 0.02),
            mass: 1.0,
            friction: 0.95,
            restitution: 0.8,
        }
    }

    #[test]
    fn sanitized_clamps_friction_and_restitution() {
        let p = ObstacleParams {
            friction: 1.5,
            restitution: -0.3,
            ..base_params()
        };
        let p = p.sanitized().unwrap();
        assert_eq!(p.friction, 1.0);
        assert_eq!(p.restitution, 0.0);
    }

    #[test]
    fn sanitized_rejects_non_positive_mass() {
        assert!(ObstacleParams { mass: 0.0, ..base_params() }.sanitized().is_none());
        assert!(ObstacleParams { mass: -1.0, ..base_params() }.sanitized().is_none());
        assert!(ObstacleParams { mass: f32::NAN, ..base_params() }.sanitized().is_none());
    }

    #[test]
    fn sanitized_rejects_degenerate_size() {
        let p = ObstacleParams {
            size: Vec2::new(0.0, 0.02),
            ..base_params()
        };
        assert!(p.sanitized().is_none());
    }

    #[test]
    fn radius_is_average_of_extents() {
        let o = Obstacle::new(1, base_params());
        assert!((o.radius() - 0.02).abs() < 1e-7);
        assert_eq!(o.vel, Vec2::zero());
    }
}
