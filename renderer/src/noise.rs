//! Layered gradient noise
//!
//! Perlin-style noise: a coarse grid of random gradient vectors with
//! quintic-smoothstep interpolation between the corner dot products.
//! Several fields at different gradient spacings sum into one height
//! map. Callers supply the random source, so a seeded generator makes
//! every field reproducible.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::Error;
use crate::matrix::Matrix;

/// Quintic smoothstep weight `6t^5 - 15t^4 + 10t^3`
fn smoothstep(t: f32) -> f32 {
    6.0 * t.powi(5) - 15.0 * t.powi(4) + 10.0 * t.powi(3)
}

/// Interpolate from `a` to `b` with a smoothed weight
fn interpolate(a: f32, b: f32, w: f32) -> f32 {
    a + smoothstep(w) * (b - a)
}

/// `length` evenly spaced values from `start` to `end` inclusive
fn linspace(start: f32, end: f32, length: usize) -> Vec<f32> {
    if length <= 1 {
        return vec![start; length];
    }
    let step = (end - start) / (length - 1) as f32;
    (0..length).map(|i| start + step * i as f32).collect()
}

/// A fixed grid of random 2D gradients defining a continuous scalar
/// field. Immutable once generated.
pub struct NoiseField {
    grads_x: Matrix,
    grads_y: Matrix,
}

impl NoiseField {
    /// Allocate the gradient grid for a `height x width` target
    /// sampled every `grad_interval` pixels. Gradient components come
    /// from a standard normal and are intentionally not renormalized.
    pub fn generate<R: Rng>(height: usize, width: usize, grad_interval: usize, rng: &mut R) -> Self {
        let grad_rows = height.div_ceil(grad_interval) + 2;
        let grad_cols = width.div_ceil(grad_interval) + 2;
        let grads_x = Matrix::from_fn(grad_rows, grad_cols, |_, _| rng.sample(StandardNormal));
        let grads_y = Matrix::from_fn(grad_rows, grad_cols, |_, _| rng.sample(StandardNormal));
        Self { grads_x, grads_y }
    }

    /// Grid shape as `(rows, cols)`
    pub fn grid_extent(&self) -> (usize, usize) {
        (self.grads_x.rows(), self.grads_x.cols())
    }

    /// Dot product of the gradient at grid corner `(xi, yi)` with the
    /// offset from that corner to `(x, y)`
    fn dot_gradient(&self, x: f32, y: f32, xi: usize, yi: usize) -> f32 {
        let dx = x - xi as f32;
        let dy = y - yi as f32;
        dx * self.grads_x[(yi, xi)] + dy * self.grads_y[(yi, xi)]
    }

    /// Evaluate the field at grid coordinate `(x, y)`. The surrounding
    /// cell is clamped into the grid, so sampling right on the far
    /// boundary interpolates against the last cell instead of reading
    /// past it.
    pub fn value_at(&self, x: f32, y: f32) -> f32 {
        let x0 = (x as usize).min(self.grads_x.cols() - 2);
        let y0 = (y as usize).min(self.grads_x.rows() - 2);
        let x1 = x0 + 1;
        let y1 = y0 + 1;

        let sx = x - x0 as f32;
        let sy = y - y0 as f32;

        let n0 = self.dot_gradient(x, y, x0, y0);
        let n1 = self.dot_gradient(x, y, x1, y0);
        let ix0 = interpolate(n0, n1, sx);

        let n2 = self.dot_gradient(x, y, x0, y1);
        let n3 = self.dot_gradient(x, y, x1, y1);
        let ix1 = interpolate(n2, n3, sx);

        interpolate(ix0, ix1, sy)
    }

    /// Sample a `height x width` field across the grid. Start and end
    /// are jittered away from the lattice so samples never sit exactly
    /// on a cell boundary; two calls with the same arguments therefore
    /// differ unless the caller reuses a seeded generator.
    pub fn sample<R: Rng>(&self, height: usize, width: usize, rng: &mut R) -> Matrix {
        let (grad_rows, grad_cols) = self.grid_extent();
        let ys = linspace(
            1.0 + rng.r#gen::<f32>(),
            (grad_rows - 1) as f32 - rng.r#gen::<f32>(),
            height,
        );
        let xs = linspace(
            1.0 + rng.r#gen::<f32>(),
            (grad_cols - 1) as f32 - rng.r#gen::<f32>(),
            width,
        );
        Matrix::from_fn(height, width, |i, j| self.value_at(xs[j], ys[i]))
    }
}

/// One octave of layered noise: gradient spacing plus its weight
#[derive(Debug, Clone, Copy)]
pub struct NoiseLayer {
    pub grad_interval: usize,
    pub amplitude: f32,
}

/// A stack of noise fields at different spatial frequencies summed
/// into a single height map
#[derive(Debug, Clone)]
pub struct LayeredNoise {
    layers: Vec<NoiseLayer>,
}

impl LayeredNoise {
    /// Pair gradient intervals with amplitudes; the lists must have
    /// equal length
    pub fn new(grad_intervals: &[usize], amplitudes: &[f32]) -> Result<Self, Error> {
        if grad_intervals.len() != amplitudes.len() {
            return Err(Error::ConfigMismatch {
                intervals: grad_intervals.len(),
                amplitudes: amplitudes.len(),
            });
        }
        let layers = grad_intervals
            .iter()
            .zip(amplitudes.iter())
            .map(|(&grad_interval, &amplitude)| NoiseLayer {
                grad_interval,
                amplitude,
            })
            .collect();
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[NoiseLayer] {
        &self.layers
    }

    /// Sum amplitude-scaled octave fields into one `height x width`
    /// height map
    pub fn height_map<R: Rng>(
        &self,
        height: usize,
        width: usize,
        rng: &mut R,
    ) -> Result<Matrix, Error> {
        let mut out = Matrix::filled(height, width, 0.0);
        for layer in &self.layers {
            let field = NoiseField::generate(height, width, layer.grad_interval, rng)
                .sample(height, width, rng)
                .map(|v| v * layer.amplitude);
            out = out.map_pairwise(|acc, v| acc + v, &field)?;
        }
        Ok(out)
    }
}
