//! Terrain viewer
//!
//! Generates a random landscape and renders it to `terrain.png`.
//! Pass a number as the first argument to seed the generator and get
//! a reproducible landscape.

use std::error::Error;
use std::time::Instant;

use glam::Vec2;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use raster::{fill_facets, rgb, Framebuffer};
use renderer::{generate_terrain, Projection, RenderConfig};

/// Terrain grid size (blocks per side)
const GRID_SIZE: usize = 150;

/// Output canvas size in pixels
const CANVAS_WIDTH: usize = 1440;
const CANVAS_HEIGHT: usize = 1080;

const SKY: u32 = rgb(0x87, 0xce, 0xeb);

const OUTPUT_PATH: &str = "terrain.png";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seed = std::env::args().nth(1).and_then(|arg| arg.parse().ok());
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = RenderConfig::default();
    let start = Instant::now();
    let scene = generate_terrain(
        GRID_SIZE,
        GRID_SIZE,
        &config.grad_intervals,
        &config.amplitudes,
        config.floor_height,
        &mut rng,
    )?;
    info!(
        "generated {} blocks in {:.1?}",
        scene.block_count(),
        start.elapsed()
    );

    let proj = Projection::new(config.view_half_angle, config.pixel_scale);
    let offset = Vec2::new(CANVAS_WIDTH as f32 * 0.5, 50.0);

    let start = Instant::now();
    let triangles = scene.render(&proj, offset);
    let mut fb = Framebuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    fb.clear(SKY);
    fill_facets(&mut fb, &triangles);
    info!(
        "rendered {} triangles in {:.1?}",
        triangles.len(),
        start.elapsed()
    );

    let mut img = image::RgbaImage::new(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
    for (i, pixel) in fb.pixels().iter().enumerate() {
        let x = (i % CANVAS_WIDTH) as u32;
        let y = (i / CANVAS_WIDTH) as u32;
        let r = (pixel >> 16) as u8;
        let g = (pixel >> 8) as u8;
        let b = *pixel as u8;
        img.put_pixel(x, y, image::Rgba([r, g, b, 0xff]));
    }
    img.save(OUTPUT_PATH)?;
    info!("wrote {OUTPUT_PATH}");

    Ok(())
}
