//! Lattice blocks
//!
//! A block is a unit cube anchored at an integer lattice point. Blocks
//! only know their own geometry and their painter order; which parts
//! of them end up visible is the scene's business.

use glam::{IVec3, Vec2};

use crate::color::Color;
use crate::projection::Projection;

/// A unit cube at a lattice position with a face color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub origin: IVec3,
    pub color: Color,
}

impl Block {
    pub const fn new(origin: IVec3, color: Color) -> Self {
        Self { origin, color }
    }

    /// The eight corners in fixed order: index 0 is the origin corner,
    /// 1..=3 walk the base face (+x, +y, +x+y), 4..=7 repeat the same
    /// pattern one level up. The scene's facet table indexes into this
    /// order.
    pub fn vertices(&self) -> [IVec3; 8] {
        let o = self.origin;
        [
            o,
            o + IVec3::new(1, 0, 0),
            o + IVec3::new(0, 1, 0),
            o + IVec3::new(1, 1, 0),
            o + IVec3::new(0, 0, 1),
            o + IVec3::new(1, 0, 1),
            o + IVec3::new(0, 1, 1),
            o + IVec3::new(1, 1, 1),
        ]
    }

    /// Screen positions of all eight corners
    pub fn projected(&self, proj: &Projection) -> [Vec2; 8] {
        self.vertices().map(|v| proj.project_point(v))
    }

    /// Painter order for the fixed view direction: far-to-near means
    /// higher `z`, then higher `y`, then higher `x` draw later. Only
    /// valid because view direction and cube alignment are fixed.
    pub fn draws_after(&self, other: &Block) -> bool {
        (self.origin.z, self.origin.y, self.origin.x)
            > (other.origin.z, other.origin.y, other.origin.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: i32, y: i32, z: i32) -> Block {
        Block::new(IVec3::new(x, y, z), Color::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_vertex_order() {
        let v = block(2, 3, 4).vertices();
        assert_eq!(v[0], IVec3::new(2, 3, 4));
        assert_eq!(v[3], IVec3::new(3, 4, 4));
        assert_eq!(v[4], IVec3::new(2, 3, 5));
        assert_eq!(v[7], IVec3::new(3, 4, 5));
        // upper face repeats the base pattern
        for i in 0..4 {
            assert_eq!(v[i + 4] - v[i], IVec3::new(0, 0, 1));
        }
    }

    #[test]
    fn test_draw_order_cascade() {
        let a = block(0, 0, 0);
        assert!(!a.draws_after(&block(1, 0, 0)));
        assert!(block(1, 0, 0).draws_after(&a));
        assert!(block(0, 1, 0).draws_after(&block(5, 0, 0)));
        assert!(block(0, 0, 1).draws_after(&block(9, 9, 0)));
    }

    #[test]
    fn test_draw_order_antisymmetric() {
        let positions = [
            (0, 0, 0),
            (1, 0, 0),
            (0, 1, 0),
            (0, 0, 1),
            (2, -1, 3),
            (-4, 2, 3),
        ];
        for &(ax, ay, az) in &positions {
            for &(bx, by, bz) in &positions {
                let a = block(ax, ay, az);
                let b = block(bx, by, bz);
                if a.origin == b.origin {
                    assert!(!a.draws_after(&b));
                    assert!(!b.draws_after(&a));
                } else {
                    assert_eq!(a.draws_after(&b), !b.draws_after(&a));
                }
            }
        }
    }
}
