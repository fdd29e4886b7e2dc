//! Landmark zone placer
//!
//! Fills each named rectangular zone with its target tile, optionally
//! encloses it with a perimeter wall that has an explicit, finite set of
//! gaps (guaranteed entrances), then layers decorative point-writes on
//! top. Decorations run after enclosure and, for walled zones, stay off
//! the border so the entrance-count invariant holds.

use crate::grid::CityGrid;
use crate::plan::{CityPlan, ZoneSpec};
use crate::tiles::TileType;

/// Place every landmark zone in the plan, in order.
pub fn place_landmarks(grid: &mut CityGrid, plan: &CityPlan) {
    for zone in &plan.landmarks {
        place_zone(grid, zone);
    }
}

fn place_zone(grid: &mut CityGrid, zone: &ZoneSpec) {
    let (x1, y1, x2, y2) = zone.rect;
    grid.fill(x1, y1, x2, y2, zone.fill);

    if let Some(gaps) = &zone.gaps {
        enclose(grid, zone.rect, gaps);
    }

    for d in &zone.decorations {
        grid.set(d.x, d.y, d.tile);
    }
}

/// Write walls along all four border rows/columns of the rectangle,
/// skipping the gap coordinates, which keep the interior fill and
/// function as entrances.
fn enclose(grid: &mut CityGrid, rect: (i32, i32, i32, i32), gaps: &[(i32, i32)]) {
    let (x1, y1, x2, y2) = rect;
    for x in x1..=x2 {
        wall_unless_gap(grid, x, y1, gaps);
        wall_unless_gap(grid, x, y2, gaps);
    }
    for y in y1..=y2 {
        wall_unless_gap(grid, x1, y, gaps);
        wall_unless_gap(grid, x2, y, gaps);
    }
}

fn wall_unless_gap(grid: &mut CityGrid, x: i32, y: i32, gaps: &[(i32, i32)]) {
    if !gaps.contains(&(x, y)) {
        grid.set(x, y, TileType::Wall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Decoration;

    fn walled_plaza() -> ZoneSpec {
        ZoneSpec {
            name: "plaza",
            rect: (148, 160, 168, 190),
            fill: TileType::Plaza,
            gaps: Some(vec![(158, 160), (158, 190), (148, 175), (168, 175)]),
            decorations: vec![Decoration { x: 158, y: 175, tile: TileType::Fountain }],
            light_overlays: vec![],
        }
    }

    #[test]
    fn test_enclosure_exactness() {
        let mut grid = CityGrid::new(300, 300);
        place_zone(&mut grid, &walled_plaza());

        let (x1, y1, x2, y2) = (148, 160, 168, 190);
        let gaps = [(158, 160), (158, 190), (148, 175), (168, 175)];
        let mut walkable_border = 0;
        for x in x1..=x2 {
            for y in [y1, y2] {
                check_border_cell(&grid, x, y, &gaps, &mut walkable_border);
            }
        }
        for y in (y1 + 1)..y2 {
            for x in [x1, x2] {
                check_border_cell(&grid, x, y, &gaps, &mut walkable_border);
            }
        }
        assert_eq!(walkable_border, 4);
    }

    fn check_border_cell(
        grid: &CityGrid,
        x: i32,
        y: i32,
        gaps: &[(i32, i32)],
        walkable: &mut usize,
    ) {
        if gaps.contains(&(x, y)) {
            assert_eq!(grid.get(x, y), TileType::Plaza, "gap ({x},{y}) must stay open");
            *walkable += 1;
        } else {
            assert_eq!(grid.get(x, y), TileType::Wall, "border ({x},{y}) must be wall");
        }
    }

    #[test]
    fn test_interior_keeps_fill_and_decorations() {
        let mut grid = CityGrid::new(300, 300);
        place_zone(&mut grid, &walled_plaza());
        assert_eq!(grid.get(158, 175), TileType::Fountain);
        assert_eq!(grid.get(155, 170), TileType::Plaza);
    }

    #[test]
    fn test_open_zone_has_no_walls() {
        let mut grid = CityGrid::new(100, 100);
        let zone = ZoneSpec {
            name: "court",
            rect: (10, 10, 30, 30),
            fill: TileType::Plaza,
            gaps: None,
            decorations: vec![],
            light_overlays: vec![],
        };
        place_zone(&mut grid, &zone);
        for x in 10..=30 {
            assert_eq!(grid.get(x, 10), TileType::Plaza);
            assert_eq!(grid.get(x, 30), TileType::Plaza);
        }
    }
}
