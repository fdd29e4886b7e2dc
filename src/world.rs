//! World container and generation pipeline
//!
//! Bundles the finished grid and its derived catalogs, and owns the
//! stage orchestration: arterials, landmarks, blocks, favelas, secondary
//! overlay, leak pass, then the read-only light derivation. The pipeline
//! runs exactly once per world; afterwards the grid is immutable and all
//! access goes through the query methods.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GenConfig;
use crate::gen::{arterial, blocks, favela, landmarks, leaks, overlay};
use crate::grid::CityGrid;
use crate::lights::{self, LightSource};
use crate::plan::CityPlan;
use crate::query;
use crate::seeds::CitySeeds;
use crate::tiles::TileType;

/// A fully generated city: the tile grid plus the derived light catalog.
pub struct CityWorld {
    /// Seeds used for generation (allows recreation)
    pub seeds: CitySeeds,
    grid: CityGrid,
    lights: Vec<LightSource>,
    spawn: (i32, i32),
}

impl CityWorld {
    /// Run the full generation pipeline and return an owned world.
    pub fn generate(
        width: usize,
        height: usize,
        seeds: CitySeeds,
        plan: &CityPlan,
        config: &GenConfig,
    ) -> Self {
        let mut grid = CityGrid::new(width, height);

        arterial::paint_arterials(&mut grid, plan, config);
        landmarks::place_landmarks(&mut grid, plan);

        let mut rng = ChaCha8Rng::seed_from_u64(seeds.blocks);
        for district in &plan.blocks {
            blocks::fill_block(&mut grid, district, config, &mut rng);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seeds.favela);
        for district in &plan.favelas {
            let (x1, y1, x2, y2) = district.rect;
            favela::generate(&mut grid, x1, y1, x2, y2, config, &mut rng);
        }

        overlay::carve_secondary_streets(&mut grid, plan);

        let mut rng = ChaCha8Rng::seed_from_u64(seeds.leaks);
        leaks::leak_pass(&mut grid, config, &mut rng);

        let lights = lights::derive_lights(&grid, plan, config, seeds.lights);

        Self {
            seeds,
            grid,
            lights,
            spawn: plan.spawn,
        }
    }

    /// The reference 300x300 city from a single master seed.
    pub fn reference(master_seed: u64) -> Self {
        Self::generate(
            300,
            300,
            CitySeeds::from_master(master_seed),
            &CityPlan::reference_city(),
            &GenConfig::default(),
        )
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.width(), self.grid.height())
    }

    /// The static light catalog, in derivation order.
    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn spawn(&self) -> (i32, i32) {
        self.spawn
    }

    /// Read-only access to the finished grid, for export and inspection.
    pub fn grid(&self) -> &CityGrid {
        &self.grid
    }

    pub fn tile_at(&self, x: f32, y: f32) -> TileType {
        query::tile_at(&self.grid, x, y)
    }

    pub fn is_walkable(&self, x: f32, y: f32) -> bool {
        query::is_walkable(&self.grid, x, y)
    }

    pub fn is_building(&self, x: f32, y: f32) -> bool {
        query::is_building(&self.grid, x, y)
    }

    pub fn is_area_walkable(&self, cx: f32, cy: f32, half_w: f32, half_h: f32) -> bool {
        query::is_area_walkable(&self.grid, cx, cy, half_w, half_h)
    }

    pub fn is_npc_walkable(&self, cx: f32, cy: f32, half_w: f32, half_h: f32) -> bool {
        query::is_npc_walkable(&self.grid, cx, cy, half_w, half_h)
    }

    /// Fraction of walkable tiles reachable from the spawn tile.
    pub fn walkable_coverage(&self) -> f32 {
        query::walkable_coverage(&self.grid, self.spawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let a = CityWorld::reference(42);
        let b = CityWorld::reference(42);
        assert!(a.grid.cells() == b.grid.cells());
        assert_eq!(a.lights(), b.lights());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = CityWorld::reference(1);
        let b = CityWorld::reference(2);
        assert!(a.grid.cells() != b.grid.cells());
    }

    #[test]
    fn test_arterial_cross_section_survives_pipeline() {
        let world = CityWorld::reference(42);
        for x in 0..300 {
            assert_eq!(world.tile_at(x as f32, 148.0), TileType::Sidewalk);
            assert_eq!(world.tile_at(x as f32, 149.0), TileType::Street);
            assert_eq!(world.tile_at(x as f32, 151.0), TileType::Street);
            assert_eq!(world.tile_at(x as f32, 152.0), TileType::Sidewalk);
        }
    }

    #[test]
    fn test_walled_plaza_enclosure_survives_pipeline() {
        let world = CityWorld::reference(42);
        let (x1, y1, x2, y2) = (148i32, 160i32, 168i32, 190i32);
        let gaps = [(158, 160), (158, 190), (148, 175), (168, 175)];
        let mut open = 0;
        for x in x1..=x2 {
            for y in [y1, y2] {
                if gaps.contains(&(x, y)) {
                    assert_eq!(world.tile_at(x as f32, y as f32), TileType::Plaza);
                    open += 1;
                } else {
                    assert_eq!(world.tile_at(x as f32, y as f32), TileType::Wall);
                }
            }
        }
        for y in (y1 + 1)..y2 {
            for x in [x1, x2] {
                if gaps.contains(&(x, y)) {
                    assert_eq!(world.tile_at(x as f32, y as f32), TileType::Plaza);
                    open += 1;
                } else {
                    assert_eq!(world.tile_at(x as f32, y as f32), TileType::Wall);
                }
            }
        }
        assert_eq!(open, 4);
    }

    #[test]
    fn test_spawn_is_walkable_and_connectivity_holds() {
        let world = CityWorld::reference(42);
        let (sx, sy) = world.spawn();
        assert!(world.is_walkable(sx as f32, sy as f32));
        let coverage = world.walkable_coverage();
        assert!(coverage >= 0.90, "coverage regressed to {coverage:.3}");
    }

    #[test]
    fn test_query_bounds_safety_on_reference_world() {
        let world = CityWorld::reference(42);
        assert_eq!(world.tile_at(-1.0, 0.0), TileType::Void);
        assert_eq!(world.tile_at(0.0, 300.0), TileType::Void);
        assert!(!world.is_walkable(-5.0, -5.0));
        assert!(!world.is_area_walkable(-2.0, -2.0, 0.5, 0.5));
    }

    #[test]
    fn test_districts_have_no_background_pockets() {
        let world = CityWorld::reference(42);
        let plan = CityPlan::reference_city();
        for district in &plan.blocks {
            let (x1, y1, x2, y2) = district.rect;
            for y in y1..=y2 {
                for x in x1..=x2 {
                    assert_ne!(
                        world.tile_at(x as f32, y as f32),
                        TileType::Grass,
                        "background leak in block at ({x},{y})"
                    );
                }
            }
        }
        for district in &plan.favelas {
            let (x1, y1, x2, y2) = district.rect;
            for y in y1..=y2 {
                for x in x1..=x2 {
                    assert_ne!(
                        world.tile_at(x as f32, y as f32),
                        TileType::Grass,
                        "background leak in favela at ({x},{y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_custom_dimensions_accepted() {
        let plan = CityPlan {
            arterials: vec![],
            landmarks: vec![],
            blocks: vec![],
            favelas: vec![],
            secondary_streets: vec![],
            hubs: vec![],
            spawn: (10, 10),
        };
        let world = CityWorld::generate(
            64,
            48,
            CitySeeds::from_master(9),
            &plan,
            &GenConfig::default(),
        );
        assert_eq!(world.dimensions(), (64, 48));
        assert_eq!(world.tile_at(63.0, 47.0), TileType::Grass);
    }
}
