//! Raster surface and triangle fill
//!
//! The drawing end of the pipeline: an owned pixel buffer plus a
//! scanline triangle fill. Geometry and occlusion stay upstream in the
//! renderer crate; this crate only consumes finished screen triangles.

pub mod framebuffer;
pub mod triangle;

pub use framebuffer::{Framebuffer, rgb};
pub use triangle::{fill_facets, fill_triangle};
