//! Arterial road painter
//!
//! Stamps the hand-specified primary roads across the full span of the
//! grid, before anything else is placed, so later `safe_fill` passes can
//! never overwrite them. An avenue is a 5-cell cross-section of sidewalk,
//! lane, tree-planted center lane, lane, sidewalk; a bare road is 3 cells
//! of street with no sidewalks, favela style.

use crate::config::GenConfig;
use crate::grid::CityGrid;
use crate::plan::{ArterialSpec, CityPlan, RoadAxis, RoadStyle};
use crate::tiles::TileType;

/// Paint every arterial road in the plan.
pub fn paint_arterials(grid: &mut CityGrid, plan: &CityPlan, config: &GenConfig) {
    for road in &plan.arterials {
        paint_road(grid, road, config);
    }
}

fn paint_road(grid: &mut CityGrid, road: &ArterialSpec, config: &GenConfig) {
    let spacing = config.arterial_tree_spacing.max(1);
    match (road.axis, road.style) {
        (RoadAxis::Row(y), RoadStyle::Avenue) => {
            for x in 0..grid.width() as i32 {
                grid.set(x, y - 2, TileType::Sidewalk);
                grid.set(x, y - 1, TileType::Street);
                grid.set(x, y, center_lane(x, spacing));
                grid.set(x, y + 1, TileType::Street);
                grid.set(x, y + 2, TileType::Sidewalk);
            }
        }
        (RoadAxis::Row(y), RoadStyle::Bare) => {
            for x in 0..grid.width() as i32 {
                grid.fill(x, y - 1, x, y + 1, TileType::Street);
            }
        }
        (RoadAxis::Col(x), RoadStyle::Avenue) => {
            for y in 0..grid.height() as i32 {
                grid.set(x - 2, y, TileType::Sidewalk);
                grid.set(x - 1, y, TileType::Street);
                grid.set(x, y, center_lane(y, spacing));
                grid.set(x + 1, y, TileType::Street);
                grid.set(x + 2, y, TileType::Sidewalk);
            }
        }
        (RoadAxis::Col(x), RoadStyle::Bare) => {
            for y in 0..grid.height() as i32 {
                grid.fill(x - 1, y, x + 1, y, TileType::Street);
            }
        }
    }
}

/// Center lane plants a tree every `spacing` cells along the road.
fn center_lane(along: i32, spacing: i32) -> TileType {
    if along.rem_euclid(spacing) == 0 {
        TileType::Tree
    } else {
        TileType::Street
    }
}
