//! Terrain synthesis
//!
//! Turns a layered-noise height field into a populated scene by
//! stacking blocks from a floor height up to each column's height.

use glam::IVec3;
use log::debug;
use rand::Rng;

use crate::block::Block;
use crate::color::Color;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::noise::LayeredNoise;
use crate::scene::Scene;

/// Parameter set for a full generate-and-render pass
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// View half-angle in radians
    pub view_half_angle: f32,
    /// Screen pixels per lattice unit
    pub pixel_scale: f32,
    /// Gradient spacing per noise octave
    pub grad_intervals: Vec<usize>,
    /// Weight per noise octave; must pair up with `grad_intervals`
    pub amplitudes: Vec<f32>,
    /// Lowest lattice layer blocks are stacked from
    pub floor_height: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            view_half_angle: core::f32::consts::FRAC_PI_6,
            pixel_scale: 12.0,
            grad_intervals: vec![20, 8],
            amplitudes: vec![9.0, 7.0],
            floor_height: -3,
        }
    }
}

/// Logistic squash to `(0, 1)`
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Color ramp over block height: warm and bright toward the peaks,
/// darker and cooler toward the floor
fn height_color(z: i32) -> Color {
    let s = sigmoid(z as f32);
    Color::new(s.sqrt(), 0.8 * (1.0 - s), 0.4)
}

/// Stack one block per integer `z` in `[floor_height, height]` for
/// every column of the height map. Heights are floored first; matrix
/// row indexes the `y` axis, column the `x` axis.
pub fn scene_from_height_map(height_map: &Matrix, floor_height: i32) -> Scene {
    let heights = height_map.map(|h| h.floor());
    let mut scene = Scene::new();
    for i in 0..heights.rows() {
        for j in 0..heights.cols() {
            let h = heights[(i, j)] as i32;
            for z in floor_height..=h {
                scene.add_block(Block::new(
                    IVec3::new(j as i32, i as i32, z),
                    height_color(z),
                ));
            }
        }
    }
    scene
}

/// Generate a `width x height` landscape: layered noise into a height
/// map, height map into a block scene
pub fn generate_terrain<R: Rng>(
    width: usize,
    height: usize,
    grad_intervals: &[usize],
    amplitudes: &[f32],
    floor_height: i32,
    rng: &mut R,
) -> Result<Scene, Error> {
    let noise = LayeredNoise::new(grad_intervals, amplitudes)?;
    let height_map = noise.height_map(height, width, rng)?;
    let scene = scene_from_height_map(&height_map, floor_height);
    debug!(
        "generated {} blocks for a {}x{} terrain",
        scene.block_count(),
        width,
        height
    );
    Ok(scene)
}
