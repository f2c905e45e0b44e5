//! Per-tick obstacle integration: friction damping, position advance,
//! boundary reflection.

use crate::domain::obstacle::Obstacle;

/// Advance one obstacle by `dt` seconds.
///
/// Order matters: damp velocity first, then move, then reflect off the
/// domain walls. Reflection clamps the position to the wall and flips the
/// axis velocity damped by restitution. A zero `dt` is a valid no-motion
/// tick; clamping oversized `dt` is the caller's responsibility.
pub fn integrate(obstacle: &mut Obstacle, dt: f32) {
    obstacle.vel.x *= obstacle.friction;
    obstacle.vel.y *= obstacle.friction;

    obstacle.pos = obstacle.pos + obstacle.vel * dt;

    let half = obstacle.half_extents();
    if obstacle.pos.x - half.x < 0.0 {
        obstacle.pos.x = half.x;
        obstacle.vel.x = -obstacle.vel.x * obstacle.restitution;
    } else if obstacle.pos.x + half.x > 1.0 {
        obstacle.pos.x = 1.0 - half.x;
        obstacle.vel.x = -obstacle.vel.x * obstacle.restitution;
    }
    if obstacle.pos.y - half.y < 0.0 {
        obstacle.pos.y = half.y;
        obstacle.vel.y = -obstacle.vel.y * obstacle.restitution;
    } else if obstacle.pos.y + half.y > 1.0 {
        obstacle.pos.y = 1.0 - half.y;
        obstacle.vel.y = -obstacle.vel.y * obstacle.restitution;
    }
}

pub fn integrate_all(obstacles: &mut [Obstacle], dt: f32) {
    for obstacle in obstacles.iter_mut() {
        integrate(obstacle, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::domain::obstacle::ObstacleParams;

    fn obstacle(pos: Vec2, vel: Vec2, friction: f32, restitution: f32) -> Obstacle {
        let mut o = Obstacle::new(
            1,
            ObstacleParams {
                pos,
                size: Vec2::new(0.02, 0.02),
                mass: 1.0,
                friction,
                restitution,
            }
            .sanitized()
            .unwrap(),
        );
        o.vel = vel;
        o
    }

    #[test]
    fn left_wall_reflects_and_damps() {
        // Leading edge crosses x=0; position clamps to the half-extent and
        // the axis velocity flips, damped by restitution.
        let mut o = obstacle(
            Vec2::new(0.01, 0.5),
            Vec2::new(-0.5, 0.0),
            1.0,
            0.8,
        );
        integrate(&mut o, 1.0);
        assert!((o.pos.x - 0.01).abs() < 1e-6);
        assert!((o.vel.x - 0.4).abs() < 1e-6);
        assert_eq!(o.vel.y, 0.0);
    }

    #[test]
    fn friction_strictly_decreases_speed() {
        let mut o = obstacle(
            Vec2::new(0.5, 0.5),
            Vec2::new(0.3, -0.4),
            0.9,
            0.8,
        );
        let mut last = o.speed();
        for _ in 0..50 {
            integrate(&mut o, 0.001);
            let now = o.speed();
            assert!(now < last);
            last = now;
        }
        // Long-run speed decays toward numeric zero.
        for _ in 0..2000 {
            integrate(&mut o, 0.001);
        }
        assert!(o.speed() < 1e-4);
    }

    #[test]
    fn position_stays_within_half_extent_bounds() {
        let mut state = 99u32;
        for _ in 0..40 {
            let vx = crate::core::random::next_unit(&mut state) * 4.0 - 2.0;
            let vy = crate::core::random::next_unit(&mut state) * 4.0 - 2.0;
            let px = crate::core::random::next_unit(&mut state);
            let py = crate::core::random::next_unit(&mut state);
            let mut o = obstacle(Vec2::new(px, py), Vec2::new(vx, vy), 0.95, 0.8);
            for _ in 0..10 {
                integrate(&mut o, 0.05);
                let half = o.half_extents();
                assert!(o.pos.x >= half.x && o.pos.x <= 1.0 - half.x);
                assert!(o.pos.y >= half.y && o.pos.y <= 1.0 - half.y);
            }
        }
    }

    #[test]
    fn zero_dt_applies_friction_but_no_motion() {
        let mut o = obstacle(
            Vec2::new(0.5, 0.5),
            Vec2::new(0.2, 0.0),
            0.95,
            0.8,
        );
        integrate(&mut o, 0.0);
        assert_eq!(o.pos, Vec2::new(0.5, 0.5));
        assert!((o.vel.x - 0.19).abs() < 1e-6);
    }
}
