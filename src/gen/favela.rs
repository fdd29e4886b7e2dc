//! Recursive favela labyrinth generator
//!
//! Recursive rectangle bisection: each split lays a corridor across the
//! full parent rectangle before recursing into the two halves, so every
//! leaf is connected to its sibling by construction and the whole subtree
//! forms one walkable component without relying on the repair pass.
//! Regions below the minimum size switch to a dense stochastic micro-fill
//! of 1-2 cell buildings with the remainder swept to alley.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::GenConfig;
use crate::grid::CityGrid;
use crate::tiles::TileType;

/// Generate a favela labyrinth over the inclusive rectangle.
pub fn generate(
    grid: &mut CityGrid,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    config: &GenConfig,
    rng: &mut ChaCha8Rng,
) {
    let width = x2 - x1 + 1;
    let height = y2 - y1 + 1;
    if width < config.favela_min_region || height < config.favela_min_region {
        micro_fill(grid, x1, y1, x2, y2, config, rng);
        return;
    }

    // Bisect along the larger dimension, randomly if square.
    let split_vertical = if width > height {
        true
    } else if height > width {
        false
    } else {
        rng.gen_bool(0.5)
    };

    let corridor_tile = if rng.gen_bool(config.favela_street_chance) {
        TileType::Street
    } else {
        TileType::Alley
    };
    // Street corridors are 2 cells wide, alleys 1.
    let cw = if corridor_tile == TileType::Street { 2 } else { 1 };
    let margin = config.favela_split_margin;

    if split_vertical {
        let (lo, hi) = (x1 + margin, x2 - margin - cw + 1);
        if lo > hi {
            micro_fill(grid, x1, y1, x2, y2, config, rng);
            return;
        }
        let s = rng.gen_range(lo..=hi);
        // Corridor spans the entire parent rectangle's other axis.
        grid.fill(s, y1, s + cw - 1, y2, corridor_tile);
        side_punch(grid, rng, config, (s - 3, s - 1), (y1, y2), true);
        side_punch(grid, rng, config, (s + cw, s + cw + 2), (y1, y2), true);
        generate(grid, x1, y1, s - 1, y2, config, rng);
        generate(grid, s + cw, y1, x2, y2, config, rng);
    } else {
        let (lo, hi) = (y1 + margin, y2 - margin - cw + 1);
        if lo > hi {
            micro_fill(grid, x1, y1, x2, y2, config, rng);
            return;
        }
        let s = rng.gen_range(lo..=hi);
        grid.fill(x1, s, x2, s + cw - 1, corridor_tile);
        side_punch(grid, rng, config, (s - 3, s - 1), (x1, x2), false);
        side_punch(grid, rng, config, (s + cw, s + cw + 2), (x1, x2), false);
        generate(grid, x1, y1, x2, s - 1, config, rng);
        generate(grid, x1, s + cw, x2, y2, config, rng);
    }
}

/// With some probability, carve one short perpendicular punch-through on
/// one side of a corridor, at a random point along it. Creates shortcuts
/// between leaves that are not siblings.
fn side_punch(
    grid: &mut CityGrid,
    rng: &mut ChaCha8Rng,
    config: &GenConfig,
    depth: (i32, i32),
    along_range: (i32, i32),
    vertical_corridor: bool,
) {
    if !rng.gen_bool(config.favela_side_punch_chance) {
        return;
    }
    let along = rng.gen_range(along_range.0..=along_range.1);
    if vertical_corridor {
        grid.fill(depth.0, along, depth.1, along, TileType::Alley);
    } else {
        grid.fill(along, depth.0, along, depth.1, TileType::Alley);
    }
}

/// Leaf case: dense stochastic micro-fill. Buildings of random 1-2 cell
/// extent are placed on a 2-cell stride, collision-checked so they never
/// overwrite corridors, punches, or each other; whatever background is
/// left becomes alley.
fn micro_fill(
    grid: &mut CityGrid,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    config: &GenConfig,
    rng: &mut ChaCha8Rng,
) {
    let stride = config.favela_micro_stride.max(1);
    let mut y = y1;
    while y <= y2 {
        let mut x = x1;
        while x <= x2 {
            if rng.gen_bool(config.favela_build_chance) {
                let bw = rng.gen_range(1..=2);
                let bh = rng.gen_range(1..=2);
                let (bx2, by2) = (x + bw - 1, y + bh - 1);
                if bx2 <= x2 && by2 <= y2 && grid.region_is_background(x, y, bx2, by2) {
                    let tile = if rng.gen_bool(config.favela_tall_chance) {
                        TileType::BuildingTall
                    } else {
                        TileType::BuildingLow
                    };
                    grid.fill(x, y, bx2, by2, tile);
                }
            }
            x += stride;
        }
        y += stride;
    }

    for y in y1..=y2 {
        for x in x1..=x2 {
            if grid.get(x, y) == TileType::Grass {
                grid.set(x, y, TileType::Alley);
            }
        }
    }
}
