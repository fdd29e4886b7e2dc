//! Walkability/collision query layer
//!
//! Pure, read-only functions over the finished grid. Fractional world
//! coordinates are floored to cell indices; out-of-bounds reads return
//! the `Void` sentinel and predicates return `false`, never panicking.

use std::collections::VecDeque;

use crate::grid::CityGrid;
use crate::tilemap::Tilemap;
use crate::tiles::TileType;

/// Tile under a fractional world coordinate; `Void` out of bounds.
pub fn tile_at(grid: &CityGrid, x: f32, y: f32) -> TileType {
    grid.get(x.floor() as i32, y.floor() as i32)
}

pub fn is_walkable(grid: &CityGrid, x: f32, y: f32) -> bool {
    tile_at(grid, x, y).is_walkable()
}

pub fn is_building(grid: &CityGrid, x: f32, y: f32) -> bool {
    tile_at(grid, x, y).is_building()
}

/// True iff all four corners of the half-extents box are walkable.
///
/// Entities pass asymmetric extents per edge to emulate perspective
/// occlusion (a tight inset on front-facing edges, a larger one on
/// back-facing edges), but the query itself is just four corner checks.
pub fn is_area_walkable(grid: &CityGrid, cx: f32, cy: f32, half_w: f32, half_h: f32) -> bool {
    is_walkable(grid, cx - half_w, cy - half_h)
        && is_walkable(grid, cx + half_w, cy - half_h)
        && is_walkable(grid, cx - half_w, cy + half_h)
        && is_walkable(grid, cx + half_w, cy + half_h)
}

/// As `is_area_walkable`, but additionally rejects `Entrance` tiles, so
/// autonomous NPCs cannot wander into scripted-only transition cells.
pub fn is_npc_walkable(grid: &CityGrid, cx: f32, cy: f32, half_w: f32, half_h: f32) -> bool {
    let corners = [
        (cx - half_w, cy - half_h),
        (cx + half_w, cy - half_h),
        (cx - half_w, cy + half_h),
        (cx + half_w, cy + half_h),
    ];
    corners.iter().all(|&(x, y)| {
        let tile = tile_at(grid, x, y);
        tile.is_walkable() && tile != TileType::Entrance
    })
}

/// Fraction of all walkable tiles reachable from the spawn tile by
/// 4-connected flood fill. Diagnostic for the leak pass: the generator
/// never acts on this, it only reports it.
pub fn walkable_coverage(grid: &CityGrid, spawn: (i32, i32)) -> f32 {
    let mut total = 0usize;
    for (_, _, tile) in grid.iter() {
        if tile.is_walkable() {
            total += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }

    let (sx, sy) = spawn;
    if !grid.get(sx, sy).is_walkable() {
        return 0.0;
    }

    let mut visited: Tilemap<bool> = Tilemap::new(grid.width(), grid.height());
    let mut queue = VecDeque::new();
    visited.set(sx as usize, sy as usize, true);
    queue.push_back((sx as usize, sy as usize));
    let mut reached = 1usize;

    while let Some((x, y)) = queue.pop_front() {
        for (nx, ny) in visited.neighbors(x, y) {
            if *visited.get(nx, ny) {
                continue;
            }
            if grid.get(nx as i32, ny as i32).is_walkable() {
                visited.set(nx, ny, true);
                reached += 1;
                queue.push_back((nx, ny));
            }
        }
    }

    reached as f32 / total as f32
}
