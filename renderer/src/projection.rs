//! Isometric screen projection
//!
//! A fixed 2x2 linear map built from a view half-angle and a pixel
//! scale. Lattice points are first collapsed onto the view diagonal
//! with [`diagonal`]; pushing that 2D coordinate through the matrix is
//! what produces the isometric look.

use core::f32::consts::FRAC_PI_2;

use glam::{IVec3, Vec2};

use crate::matrix::Matrix;

/// Collapse a lattice point onto the view diagonal: `(x - z, y - z)`
pub fn diagonal(v: IVec3) -> Vec2 {
    Vec2::new((v.x - v.z) as f32, (v.y - v.z) as f32)
}

/// Fixed-angle parallel projection from diagonal coordinates to
/// screen coordinates
#[derive(Debug, Clone)]
pub struct Projection {
    m: Matrix,
}

impl Projection {
    /// Build the projection for view half-angle `alpha` (radians) and
    /// pixel `scale`
    pub fn new(alpha: f32, scale: f32) -> Self {
        let theta = FRAC_PI_2 - alpha;
        let phi = 2.0 * alpha - FRAC_PI_2;
        let m = Matrix::from_fn(2, 2, |i, j| match (i, j) {
            (0, 0) => scale * theta.cos(),
            (0, 1) => -scale * phi.cos(),
            (1, 0) => scale * theta.sin(),
            _ => scale * phi.sin(),
        });
        Self { m }
    }

    /// Apply the matrix to `v` as a column vector
    pub fn project(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m[(0, 0)] * v.x + self.m[(0, 1)] * v.y,
            self.m[(1, 0)] * v.x + self.m[(1, 1)] * v.y,
        )
    }

    /// Screen position of a lattice point
    pub fn project_point(&self, p: IVec3) -> Vec2 {
        self.project(diagonal(p))
    }
}
