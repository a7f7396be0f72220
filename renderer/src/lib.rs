//! Isometric block renderer
//!
//! Generates voxel landscapes from layered gradient noise and resolves
//! which block facets stay visible under a fixed oblique projection.
//! The output is a list of independent screen triangles; rasterization
//! happens downstream.

pub mod block;
pub mod color;
pub mod error;
pub mod matrix;
pub mod noise;
pub mod projection;
pub mod scene;
pub mod terrain;

pub use block::Block;
pub use color::Color;
pub use error::Error;
pub use matrix::Matrix;
pub use noise::{LayeredNoise, NoiseField, NoiseLayer};
pub use projection::{Projection, diagonal};
pub use scene::{FACETS_PER_BLOCK, FaceKind, Facet, FacetKey, Scene, ScreenTriangle};
pub use terrain::{RenderConfig, generate_terrain, scene_from_height_map};
