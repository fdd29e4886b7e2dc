//! Static light-source derivation
//!
//! A single deterministic scan over the finished grid emits the catalog of
//! static lights: street glows striding denser near the urban hubs, physical
//! sidewalk lamps biased toward corners, dim alley lights, plaza and shopping
//! floods, sparse residential windows. Named landmarks additionally get fixed
//! ring/grid overlay patterns from the city plan. The scan never mutates the
//! grid and never fails; the same grid and seed always yield the same catalog.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::config::GenConfig;
use crate::grid::CityGrid;
use crate::plan::{CityPlan, LightOverlay};
use crate::tiles::TileType;

/// What kind of light a record represents; rendering maps these to
/// color/radius/intensity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LightCategory {
    /// Physical lamp on a sidewalk corner or edge.
    Street,
    /// Ambient glow over a street lane.
    StreetGlow,
    /// Lit window in a residential building.
    Residential,
    Plaza,
    Shopping,
    /// Dim light in an alley or over an entrance.
    Alley,
}

/// One static light. Derived, never authored directly (landmark overlays
/// come from the plan but still pass through the derivation).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightSource {
    pub x: i32,
    pub y: i32,
    pub category: LightCategory,
}

/// Derive the full light catalog for a finished grid.
pub fn derive_lights(
    grid: &CityGrid,
    plan: &CityPlan,
    config: &GenConfig,
    seed: u64,
) -> Vec<LightSource> {
    let mut lights = Vec::new();

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            scan_cell(grid, plan, config, seed, x, y, &mut lights);
        }
    }

    for zone in &plan.landmarks {
        for overlay in &zone.light_overlays {
            apply_overlay(overlay, &mut lights);
        }
    }

    lights
}

fn scan_cell(
    grid: &CityGrid,
    plan: &CityPlan,
    config: &GenConfig,
    seed: u64,
    x: i32,
    y: i32,
    lights: &mut Vec<LightSource>,
) {
    match grid.get(x, y) {
        TileType::Street => {
            let stride = glow_stride(config, hub_distance(plan, x, y));
            if (x + y).rem_euclid(stride) == 0 {
                lights.push(LightSource { x, y, category: LightCategory::StreetGlow });
            }
        }
        TileType::Sidewalk => {
            let horizontal = is_road(grid.get(x - 1, y)) || is_road(grid.get(x + 1, y));
            let vertical = is_road(grid.get(x, y - 1)) || is_road(grid.get(x, y + 1));
            if !horizontal && !vertical {
                return;
            }
            let corner = horizontal && vertical;
            let dist = hub_distance(plan, x, y);
            let emit = if dist < config.light_near_radius {
                corner || (x + y).rem_euclid(10) == 0
            } else if dist < config.light_mid_radius {
                corner
            } else {
                tile_draw(seed, x, y) < config.lamp_far_chance
            };
            if emit {
                lights.push(LightSource { x, y, category: LightCategory::Street });
            }
        }
        TileType::Lamppost => {
            lights.push(LightSource { x, y, category: LightCategory::Street });
        }
        TileType::Alley => {
            if (x + y).rem_euclid(12) == 0 {
                lights.push(LightSource { x, y, category: LightCategory::Alley });
            }
        }
        TileType::Plaza => {
            if x.rem_euclid(9) == 0 && y.rem_euclid(9) == 0 {
                lights.push(LightSource { x, y, category: LightCategory::Plaza });
            }
        }
        TileType::BuildingLow | TileType::BuildingTall => {
            if x.rem_euclid(4) == 0
                && y.rem_euclid(4) == 0
                && tile_draw(seed, x, y) < config.residential_chance
            {
                lights.push(LightSource { x, y, category: LightCategory::Residential });
            }
        }
        TileType::Shopping => {
            if x.rem_euclid(4) == 0 && y.rem_euclid(4) == 0 {
                lights.push(LightSource { x, y, category: LightCategory::Shopping });
            }
        }
        TileType::Entrance => {
            lights.push(LightSource { x, y, category: LightCategory::Alley });
        }
        _ => {}
    }
}

fn apply_overlay(overlay: &LightOverlay, lights: &mut Vec<LightSource>) {
    match *overlay {
        LightOverlay::Ring { cx, cy, radius, count, category } => {
            for i in 0..count {
                let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
                let x = cx + (angle.cos() * radius).round() as i32;
                let y = cy + (angle.sin() * radius).round() as i32;
                lights.push(LightSource { x, y, category });
            }
        }
        LightOverlay::Grid { x1, y1, x2, y2, stride, category } => {
            let stride = stride.max(1);
            let mut y = y1;
            while y <= y2 {
                let mut x = x1;
                while x <= x2 {
                    lights.push(LightSource { x, y, category });
                    x += stride;
                }
                y += stride;
            }
        }
    }
}

fn is_road(tile: TileType) -> bool {
    matches!(tile, TileType::Street | TileType::Alley)
}

fn glow_stride(config: &GenConfig, dist: f32) -> i32 {
    if dist < config.light_near_radius {
        config.glow_stride_near
    } else if dist < config.light_mid_radius {
        config.glow_stride_mid
    } else {
        config.glow_stride_far
    }
}

/// Euclidean distance to the nearest urban hub; infinite with no hubs, so
/// a hubless plan falls entirely into the sparse band.
fn hub_distance(plan: &CityPlan, x: i32, y: i32) -> f32 {
    plan.hubs
        .iter()
        .map(|&(hx, hy)| {
            let dx = (x - hx) as f32;
            let dy = (y - hy) as f32;
            (dx * dx + dy * dy).sqrt()
        })
        .fold(f32::INFINITY, f32::min)
}

/// Stable per-tile pseudo-random draw in [0, 1), keyed on the lights seed.
fn tile_draw(seed: u64, x: i32, y: i32) -> f64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    x.hash(&mut hasher);
    y.hash(&mut hasher);
    (hasher.finish() >> 11) as f64 / (1u64 << 53) as f64
}
