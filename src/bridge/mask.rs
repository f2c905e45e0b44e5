//! Occupancy mask consumed by the external fluid solver.
//!
//! A fixed-resolution RGBA byte grid. The border carries four directional
//! marker texels and the interior a background texel; every live obstacle
//! stamps an elliptical footprint over interior cells. The solver and
//! renderer match on these exact byte tuples, so they must be preserved
//! bit-for-bit.

use crate::domain::obstacle::Obstacle;

pub const TEXEL_TOP: [u8; 4] = [127, 255, 0, 255];
pub const TEXEL_BOTTOM: [u8; 4] = [127, 0, 0, 255];
pub const TEXEL_LEFT: [u8; 4] = [255, 127, 0, 255];
pub const TEXEL_RIGHT: [u8; 4] = [0, 127, 0, 255];
pub const TEXEL_INTERIOR: [u8; 4] = [127, 127, 0, 255];
pub const TEXEL_OBSTACLE: [u8; 4] = [127, 127, 255, 255];

pub struct ObstacleMask {
    width: u32,
    height: u32,
    texels: Vec<u8>,
}

impl ObstacleMask {
    pub fn new(width: u32, height: u32) -> Self {
        let mut mask = Self {
            width,
            height,
            texels: vec![0u8; (width * height * 4) as usize],
        };
        mask.reset();
        mask
    }

    /// Restore the boundary-only baseline. Row 0 is the top marker, the
    /// last row the bottom marker, then the left/right columns; corner
    /// cells take the row marker.
    pub fn reset(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let texel = if y == 0 {
                    TEXEL_TOP
                } else if y == self.height - 1 {
                    TEXEL_BOTTOM
                } else if x == 0 {
                    TEXEL_LEFT
                } else if x == self.width - 1 {
                    TEXEL_RIGHT
                } else {
                    TEXEL_INTERIOR
                };
                self.put(x, y, texel);
            }
        }
    }

    /// Full rebuild: baseline, then every obstacle's current footprint.
    /// Obstacles move every tick, so stale footprints must be erased -
    /// this is deliberately not an incremental patch.
    pub fn rebuild(&mut self, obstacles: &[Obstacle]) {
        self.reset();
        for obstacle in obstacles {
            self.stamp(obstacle);
        }
    }

    /// Stamp one elliptical footprint (radii = the obstacle's size pair)
    /// over interior cells, tested at cell centers.
    fn stamp(&mut self, obstacle: &Obstacle) {
        let w = self.width as f32;
        let h = self.height as f32;
        let rx = obstacle.size.x;
        let ry = obstacle.size.y;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        let min_x = (((obstacle.pos.x - rx) * w).floor() as i64).max(1);
        let max_x = (((obstacle.pos.x + rx) * w).ceil() as i64).min(self.width as i64 - 2);
        let min_y = (((obstacle.pos.y - ry) * h).floor() as i64).max(1);
        let max_y = (((obstacle.pos.y + ry) * h).ceil() as i64).min(self.height as i64 - 2);

        for y in min_y..=max_y {
            let dy = ((y as f32 + 0.5) / h - obstacle.pos.y) / ry;
            for x in min_x..=max_x {
                let dx = ((x as f32 + 0.5) / w - obstacle.pos.x) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x as u32, y as u32, TEXEL_OBSTACLE);
                }
            }
        }
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, texel: [u8; 4]) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.texels[idx..idx + 4].copy_from_slice(&texel);
    }

    pub fn texel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.texels[idx],
            self.texels[idx + 1],
            self.texels[idx + 2],
            self.texels[idx + 3],
        ]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw texel bytes (for JS texture upload).
    pub fn as_bytes(&self) -> &[u8] {
        &self.texels
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.texels.as_ptr()
    }

    pub fn len_bytes(&self) -> usize {
        self.texels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::domain::obstacle::ObstacleParams;

    fn obstacle(x: f32, y: f32, sx: f32, sy: f32) -> Obstacle {
        Obstacle::new(
            1,
            ObstacleParams {
                pos: Vec2::new(x, y),
                size: Vec2::new(sx, sy),
                mass: 1.0,
                friction: 0.95,
                restitution: 0.8,
            }
            .sanitized()
            .unwrap(),
        )
    }

    #[test]
    fn baseline_markers_match_the_wire_convention() {
        let mask = ObstacleMask::new(16, 16);
        assert_eq!(mask.texel(5, 0), TEXEL_TOP);
        assert_eq!(mask.texel(5, 15), TEXEL_BOTTOM);
        assert_eq!(mask.texel(0, 5), TEXEL_LEFT);
        assert_eq!(mask.texel(15, 5), TEXEL_RIGHT);
        assert_eq!(mask.texel(5, 5), TEXEL_INTERIOR);
        // Corners take the row marker.
        assert_eq!(mask.texel(0, 0), TEXEL_TOP);
        assert_eq!(mask.texel(15, 15), TEXEL_BOTTOM);
        assert_eq!(mask.len_bytes(), 16 * 16 * 4);
    }

    #[test]
    fn stamp_covers_the_center_cell_and_respects_the_border() {
        let mut mask = ObstacleMask::new(16, 16);
        // Footprint wide enough to reach past the border columns.
        mask.rebuild(&[obstacle(0.5, 0.5, 0.6, 0.1)]);
        assert_eq!(mask.texel(8, 8), TEXEL_OBSTACLE);
        // Border rows and columns are never overwritten.
        assert_eq!(mask.texel(0, 8), TEXEL_LEFT);
        assert_eq!(mask.texel(15, 8), TEXEL_RIGHT);
        assert_eq!(mask.texel(8, 0), TEXEL_TOP);
    }

    #[test]
    fn rebuild_erases_stale_footprints() {
        let mut mask = ObstacleMask::new(32, 32);
        let mut o = obstacle(0.25, 0.5, 0.1, 0.1);
        mask.rebuild(std::slice::from_ref(&o));
        assert_eq!(mask.texel(8, 16), TEXEL_OBSTACLE);

        o.pos = Vec2::new(0.75, 0.5);
        mask.rebuild(std::slice::from_ref(&o));
        assert_eq!(mask.texel(8, 16), TEXEL_INTERIOR);
        assert_eq!(mask.texel(24, 16), TEXEL_OBSTACLE);
    }

    #[test]
    fn footprint_is_elliptical_not_rectangular() {
        let mut mask = ObstacleMask::new(64, 64);
        mask.rebuild(&[obstacle(0.5, 0.5, 0.2, 0.2)]);
        // Cell on the axis, inside the radius.
        assert_eq!(mask.texel(38, 32), TEXEL_OBSTACLE);
        // Corner of the bounding box, outside the ellipse.
        assert_eq!(mask.texel(43, 43), TEXEL_INTERIOR);
    }
}
