//! Collision engine: point↔obstacle and obstacle↔obstacle detection and
//! resolution, as pure functions over the live working set.
//!
//! Detection is a center-distance test against the sum of effective radii
//! (`Obstacle::radius()` for bodies, `POINT_RADIUS` for pointer points).
//! Resolution is either a full elastic impulse or a displacement-only
//! repulsion, selected by [`ResolutionMode`]. Points are externally driven
//! probes: only obstacles ever change, the point is authoritative.

use serde::Deserialize;

use crate::core::vec2::Vec2;
use crate::domain::obstacle::Obstacle;
use crate::domain::points::PointSample;

/// Fixed radius of a pointer point in normalized units.
pub const POINT_RADIUS: f32 = 0.01;

/// Assumed mass of a pointer point (a light probe).
pub const POINT_MASS: f32 = 0.1;

/// How point↔obstacle contacts are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Impulse-based elastic collision; changes the obstacle's velocity.
    #[default]
    Elastic,
    /// Constant-step push away from the point; changes position only.
    Repulsion,
}

#[inline]
pub fn point_hits_obstacle(point: &PointSample, obstacle: &Obstacle) -> bool {
    let distance = (point.pos - obstacle.pos).length();
    distance < POINT_RADIUS + obstacle.radius()
}

#[inline]
pub fn obstacles_overlap(a: &Obstacle, b: &Obstacle) -> bool {
    let distance = (b.pos - a.pos).length();
    distance < a.radius() + b.radius()
}

/// Elastic point↔obstacle resolution.
///
/// `n` points from the obstacle to the point. With relative velocity
/// `v_rel = point.movement - obstacle.vel`, a positive component along `n`
/// means the pair is separating and nothing happens. Otherwise the impulse
///
/// ```text
/// j = -(1 + e) * dot(v_rel, n) / (1/POINT_MASS + 1/mass)
/// ```
///
/// is applied to the obstacle alone, then any remaining overlap pushes the
/// obstacle back along `-n` by half the penetration. Returns whether a
/// contact was resolved.
pub fn resolve_point_elastic(point: &PointSample, obstacle: &mut Obstacle) -> bool {
    let delta = point.pos - obstacle.pos;
    let distance = delta.length();
    // Degenerate geometry: normal undefined, skip this pair for the tick.
    if distance == 0.0 {
        return false;
    }

    let n = delta * (1.0 / distance);
    let v_rel = point.movement - obstacle.vel;
    let closing = v_rel.dot(n);
    if closing > 0.0 {
        return false;
    }

    let e = obstacle.restitution;
    let j = -(1.0 + e) * closing / (1.0 / POINT_MASS + 1.0 / obstacle.mass);
    obstacle.vel = obstacle.vel + n * (j / obstacle.mass);

    let overlap = POINT_RADIUS + obstacle.radius() - distance;
    if overlap > 0.0 {
        obstacle.pos = obstacle.pos - n * (overlap * 0.5);
    }
    true
}

/// Displacement-only repulsion: step the obstacle directly away from the
/// point by `repulsion_speed`, then clamp it back inside the domain.
pub fn resolve_point_repulsion(
    point: &PointSample,
    obstacle: &mut Obstacle,
    repulsion_speed: f32,
) -> bool {
    let delta = point.pos - obstacle.pos;
    let distance = delta.length();
    if distance == 0.0 {
        return false;
    }

    let n = delta * (1.0 / distance);
    obstacle.pos = obstacle.pos - n * repulsion_speed;

    let half = obstacle.half_extents();
    obstacle.pos.x = obstacle.pos.x.clamp(half.x, 1.0 - half.x);
    obstacle.pos.y = obstacle.pos.y.clamp(half.y, 1.0 - half.y);
    true
}

/// Run every point against every obstacle once. Returns the number of
/// resolved contacts.
pub fn apply_point_collisions(
    points: &[PointSample],
    obstacles: &mut [Obstacle],
    mode: ResolutionMode,
    repulsion_speed: f32,
) -> u32 {
    let mut resolved = 0u32;
    for point in points {
        for obstacle in obstacles.iter_mut() {
            if !point_hits_obstacle(point, obstacle) {
                continue;
            }
            let hit = match mode {
                ResolutionMode::Elastic => resolve_point_elastic(point, obstacle),
                ResolutionMode::Repulsion => {
                    resolve_point_repulsion(point, obstacle, repulsion_speed)
                }
            };
            if hit {
                resolved += 1;
            }
        }
    }
    resolved
}

/// Elastic obstacle↔obstacle resolution for one pair.
///
/// Same impulse formula as the point case with `e = min(e_a, e_b)` and both
/// masses in the denominator; the impulse lands on both bodies with
/// opposite signs scaled by their own inverse mass, and the overlap
/// correction is split evenly between them.
fn resolve_pair(a: &mut Obstacle, b: &mut Obstacle) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    if distance == 0.0 {
        return false;
    }

    let n = delta * (1.0 / distance);
    let v_rel = b.vel - a.vel;
    let closing = v_rel.dot(n);
    if closing > 0.0 {
        return false;
    }

    let e = a.restitution.min(b.restitution);
    let j = -(1.0 + e) * closing / (1.0 / a.mass + 1.0 / b.mass);
    let impulse = n * j;
    a.vel = a.vel - impulse * (1.0 / a.mass);
    b.vel = b.vel + impulse * (1.0 / b.mass);

    let overlap = a.radius() + b.radius() - distance;
    if overlap > 0.0 {
        let correction = n * (overlap * 0.25);
        a.pos = a.pos - correction;
        b.pos = b.pos + correction;
    }
    true
}

/// Evaluate every unordered pair exactly once (`i < j`). Returns
/// `(checks, resolved)`; `checks` is always `n*(n-1)/2`.
pub fn apply_pair_collisions(obstacles: &mut [Obstacle]) -> (u32, u32) {
    let mut checks = 0u32;
    let mut resolved = 0u32;
    for i in 0..obstacles.len() {
        // Split so we can hold &mut to obstacle i and each j > i at once.
        let (head, tail) = obstacles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            checks += 1;
            if obstacles_overlap(a, b) && resolve_pair(a, b) {
                resolved += 1;
            }
        }
    }
    (checks, resolved)
}
