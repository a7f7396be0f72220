//! Scene assembly and occlusion resolution
//!
//! A scene owns its blocks and decides which triangular facets survive
//! on screen. Under the fixed projection every cube silhouette is a
//! hexagon cut into six triangles, and each triangle lands on a cell
//! of the diagonal-plane lattice. Facets from different blocks that
//! land on the same cell half would rasterize to the identical screen
//! triangle, so only the one drawn last in painter order is kept.
//! After that, every surviving facet rasterizes independently.

use std::collections::HashMap;

use glam::{IVec2, IVec3, Vec2};
use log::debug;

use crate::block::Block;
use crate::color::Color;
use crate::projection::Projection;

/// Facets per block: two triangles for each of the three visible faces
pub const FACETS_PER_BLOCK: u8 = 6;

/// The visible cube face a facet belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    /// +z face
    Top,
    /// +x face
    Right,
    /// +y face
    Left,
}

impl FaceKind {
    /// Fixed shading factor per face. Empirical, not a lighting model;
    /// these exact values are part of the look.
    pub fn shade_factor(&self) -> f32 {
        match self {
            FaceKind::Top => 1.0,
            FaceKind::Right => 0.8,
            FaceKind::Left => 0.9,
        }
    }
}

/// Identifies the screen triangle a facet occupies: the diagonal-plane
/// cell plus which half of the cell's square. Facets from different
/// blocks collide on this key exactly when one block occludes the
/// other along the view axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacetKey {
    pub cell: IVec2,
    pub right_half: bool,
}

/// One triangular piece of a block's projected hexagon
#[derive(Debug, Clone, Copy)]
pub struct Facet {
    key: FacetKey,
    corners: [IVec3; 3],
    face: FaceKind,
    block: usize,
}

impl Facet {
    /// Build facet `index` of the block stored at `block_idx`.
    ///
    /// Corner triples and key cells come from the projected cube: with
    /// `d = (origin.x - origin.z, origin.y - origin.z)` the six
    /// triangles cover the cells `d + (-1,-1)` (top), `d + (0,-1)` and
    /// `d + (0,0)` (+x face), `d + (0,0)` and `d + (-1,0)` (+y face),
    /// each split along the cell diagonal.
    fn from_block(block: &Block, block_idx: usize, index: u8) -> Facet {
        assert!(index < FACETS_PER_BLOCK, "facet index out of range");
        let v = block.vertices();
        let (corners, face, cell_offset, right_half) = match index {
            0 => ([v[4], v[5], v[7]], FaceKind::Top, IVec2::new(-1, -1), true),
            1 => ([v[5], v[1], v[7]], FaceKind::Right, IVec2::new(0, -1), false),
            2 => ([v[1], v[3], v[7]], FaceKind::Right, IVec2::new(0, 0), true),
            3 => ([v[3], v[2], v[7]], FaceKind::Left, IVec2::new(0, 0), false),
            4 => ([v[2], v[6], v[7]], FaceKind::Left, IVec2::new(-1, 0), true),
            _ => ([v[6], v[4], v[7]], FaceKind::Top, IVec2::new(-1, -1), false),
        };
        let d = IVec2::new(
            block.origin.x - block.origin.z,
            block.origin.y - block.origin.z,
        );
        Facet {
            key: FacetKey {
                cell: d + cell_offset,
                right_half,
            },
            corners,
            face,
            block: block_idx,
        }
    }

    pub fn key(&self) -> FacetKey {
        self.key
    }

    /// World-space corners of the triangle
    pub fn corners(&self) -> [IVec3; 3] {
        self.corners
    }

    pub fn face(&self) -> FaceKind {
        self.face
    }

    /// Index of the owning block in the scene's block list
    pub fn block(&self) -> usize {
        self.block
    }
}

/// A screen-space triangle with its resolved fill color, ready for any
/// raster backend
#[derive(Debug, Clone, Copy)]
pub struct ScreenTriangle {
    pub points: [Vec2; 3],
    pub color: Color,
}

/// Owns the block list and resolves it into visible facets
#[derive(Debug, Default)]
pub struct Scene {
    blocks: Vec<Block>,
}

impl Scene {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Resolve occlusion: walk every block's six facets and keep, per
    /// sibling key, the facet whose block draws last. Block order does
    /// not matter; the winner is the same either way.
    pub fn visible_facets(&self) -> Vec<Facet> {
        let mut winners: HashMap<FacetKey, Facet> =
            HashMap::with_capacity(self.blocks.len() * FACETS_PER_BLOCK as usize);
        for (idx, block) in self.blocks.iter().enumerate() {
            for index in 0..FACETS_PER_BLOCK {
                let facet = Facet::from_block(block, idx, index);
                match winners.get(&facet.key) {
                    Some(current) if !block.draws_after(&self.blocks[current.block]) => {}
                    _ => {
                        winners.insert(facet.key, facet);
                    }
                }
            }
        }
        winners.into_values().collect()
    }

    /// Project every visible facet to a screen triangle. `offset` is
    /// added after projection. The output order is arbitrary; no facet
    /// overlaps another, so they may be filled in any order.
    pub fn render(&self, proj: &Projection, offset: Vec2) -> Vec<ScreenTriangle> {
        let facets = self.visible_facets();
        debug!(
            "resolved {} visible facets from {} blocks",
            facets.len(),
            self.blocks.len()
        );
        facets
            .iter()
            .map(|facet| {
                let points = facet.corners.map(|c| proj.project_point(c) + offset);
                let color = self.blocks[facet.block]
                    .color
                    .scaled(facet.face.shade_factor());
                ScreenTriangle { points, color }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use core::f32::consts::FRAC_PI_6;

    use super::*;

    fn gray_block(x: i32, y: i32, z: i32) -> Block {
        Block::new(IVec3::new(x, y, z), Color::new(0.6, 0.6, 0.6))
    }

    fn scene_of(origins: &[(i32, i32, i32)]) -> Scene {
        let mut scene = Scene::new();
        for &(x, y, z) in origins {
            scene.add_block(gray_block(x, y, z));
        }
        scene
    }

    #[test]
    fn test_single_block_has_six_facets() {
        let scene = scene_of(&[(0, 0, 0)]);
        let facets = scene.visible_facets();
        assert_eq!(facets.len(), 6);

        let keys: HashSet<FacetKey> = facets.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), 6);

        // top, +x, and +y faces each contribute two triangles
        for kind in [FaceKind::Top, FaceKind::Right, FaceKind::Left] {
            assert_eq!(facets.iter().filter(|f| f.face() == kind).count(), 2);
        }
    }

    #[test]
    fn test_facet_cells_follow_block_diagonal() {
        let scene = scene_of(&[(2, 3, 1)]);
        let cells: HashSet<(i32, i32, bool)> = scene
            .visible_facets()
            .iter()
            .map(|f| (f.key().cell.x, f.key().cell.y, f.key().right_half))
            .collect();
        // d = (1, 2)
        let expected: HashSet<(i32, i32, bool)> = [
            (0, 1, true),
            (0, 1, false),
            (1, 1, false),
            (1, 2, true),
            (1, 2, false),
            (0, 2, true),
        ]
        .into_iter()
        .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_stacked_blocks_occlude() {
        let scene = scene_of(&[(0, 0, 0), (0, 0, 1), (0, 0, 2)]);
        let facets = scene.visible_facets();
        // each block above claims two cells of the one below
        assert_eq!(facets.len(), 14);

        // the z=0 and z=1 top facets lose to the block above; the top
        // of the stack keeps its own
        for facet in &facets {
            if facet.face() == FaceKind::Top {
                let owner = scene.blocks()[facet.block()];
                assert_eq!(owner.origin.z, 2, "top facet from below the stack");
            }
        }

        // unshadowed side facets of the lower blocks survive
        let side_owners: HashSet<i32> = facets
            .iter()
            .filter(|f| f.face() != FaceKind::Top)
            .map(|f| scene.blocks()[f.block()].origin.z)
            .collect();
        assert_eq!(side_owners, HashSet::from([0, 1, 2]));
    }

    #[test]
    fn test_view_axis_neighbor_fully_hides() {
        // (1, 1, 1) sits directly in front of (0, 0, 0) along the view
        // axis: all six keys collide and the near block wins them all
        let scene = scene_of(&[(0, 0, 0), (1, 1, 1)]);
        let facets = scene.visible_facets();
        assert_eq!(facets.len(), 6);
        for facet in &facets {
            assert_eq!(scene.blocks()[facet.block()].origin, IVec3::new(1, 1, 1));
        }
    }

    #[test]
    fn test_winner_independent_of_insertion_order() {
        let forward = scene_of(&[(0, 0, 0), (0, 0, 1), (1, 1, 1), (1, 0, 0)]);
        let backward = scene_of(&[(1, 0, 0), (1, 1, 1), (0, 0, 1), (0, 0, 0)]);

        let collect = |scene: &Scene| {
            scene
                .visible_facets()
                .iter()
                .map(|f| (f.key(), scene.blocks()[f.block()].origin))
                .collect::<HashMap<_, _>>()
        };
        assert_eq!(collect(&forward), collect(&backward));
    }

    #[test]
    fn test_winners_dominate_all_contenders() {
        // a solid 3x3x3 grid: heavily contested cells everywhere
        let mut scene = Scene::new();
        for x in 0..3 {
            for y in 0..3 {
                for z in -1..=1 {
                    scene.add_block(gray_block(x, y, z));
                }
            }
        }

        let mut candidates: HashMap<FacetKey, Vec<usize>> = HashMap::new();
        for idx in 0..scene.block_count() {
            for index in 0..FACETS_PER_BLOCK {
                let facet = Facet::from_block(&scene.blocks()[idx], idx, index);
                candidates.entry(facet.key()).or_default().push(idx);
            }
        }

        for winner in scene.visible_facets() {
            for &contender in &candidates[&winner.key()] {
                if contender != winner.block() {
                    assert!(
                        scene.blocks()[winner.block()].draws_after(&scene.blocks()[contender]),
                        "losing block kept the cell {:?}",
                        winner.key()
                    );
                }
            }
        }
    }

    #[test]
    fn test_render_applies_offset_and_shading() {
        let mut scene = Scene::new();
        scene.add_block(Block::new(IVec3::new(0, 0, 0), Color::new(0.5, 0.5, 0.5)));
        let proj = Projection::new(FRAC_PI_6, 10.0);
        let offset = Vec2::new(100.0, 40.0);

        let triangles = scene.render(&proj, offset);
        assert_eq!(triangles.len(), 6);

        let shaded: HashSet<String> = triangles.iter().map(|t| t.color.hex()).collect();
        let expected: HashSet<String> = [
            Color::new(0.5, 0.5, 0.5).scaled(1.0).hex(),
            Color::new(0.5, 0.5, 0.5).scaled(0.8).hex(),
            Color::new(0.5, 0.5, 0.5).scaled(0.9).hex(),
        ]
        .into_iter()
        .collect();
        assert_eq!(shaded, expected);

        // the shared apex corner (1, 1, 1) appears in every triangle,
        // offset included
        let apex = proj.project_point(IVec3::new(1, 1, 1)) + offset;
        for tri in &triangles {
            assert!(tri.points.iter().any(|p| (*p - apex).length() < 1e-4));
        }
    }
}
