//! City grid storage and write primitives
//!
//! Wraps the raw tilemap with the write operations the generation stages
//! use: unconditional `set`/`fill`, and `safe_set`/`safe_fill` variants
//! that refuse to overwrite anything already built. Every write silently
//! no-ops on out-of-bounds coordinates, so stage code can stamp patterns
//! near map edges without per-call clamping.

use crate::tilemap::Tilemap;
use crate::tiles::TileType;

#[derive(Clone, PartialEq)]
pub struct CityGrid {
    tiles: Tilemap<TileType>,
}

impl CityGrid {
    /// Allocate a grid default-initialized to `Grass`, the open background.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: Tilemap::new_with(width, height, TileType::Grass),
        }
    }

    pub fn width(&self) -> usize {
        self.tiles.width
    }

    pub fn height(&self) -> usize {
        self.tiles.height
    }

    /// Read a cell; `Void` for out-of-bounds.
    pub fn get(&self, x: i32, y: i32) -> TileType {
        if self.tiles.in_bounds(x, y) {
            *self.tiles.get(x as usize, y as usize)
        } else {
            TileType::Void
        }
    }

    /// Write a cell unconditionally. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, tile: TileType) {
        if self.tiles.in_bounds(x, y) {
            self.tiles.set(x as usize, y as usize, tile);
        }
    }

    /// Write a cell only if it still holds background (`Grass`/`Void`).
    /// Protects roads and landmarks from later additive passes.
    pub fn safe_set(&mut self, x: i32, y: i32, tile: TileType) {
        if self.tiles.in_bounds(x, y) && self.tiles.get(x as usize, y as usize).is_background() {
            self.tiles.set(x as usize, y as usize, tile);
        }
    }

    /// Fill an inclusive rectangle unconditionally. Corner order does not
    /// matter; the rectangle is clipped to the map.
    pub fn fill(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, tile: TileType) {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.set(x, y, tile);
            }
        }
    }

    /// Fill an inclusive rectangle, skipping non-background cells.
    pub fn safe_fill(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, tile: TileType) {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.safe_set(x, y, tile);
            }
        }
    }

    /// True if every cell of the inclusive rectangle is background.
    /// Out-of-bounds cells count as non-background, so a footprint that
    /// hangs off the map is rejected.
    pub fn region_is_background(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        for y in y1..=y2 {
            for x in x1..=x2 {
                if !self.tiles.in_bounds(x, y) {
                    return false;
                }
                if !self.tiles.get(x as usize, y as usize).is_background() {
                    return false;
                }
            }
        }
        true
    }

    /// Iterate all cells with coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TileType)> + '_ {
        self.tiles.iter().map(|(x, y, t)| (x, y, *t))
    }

    /// Raw row-major cells, for byte-identical comparison of two grids.
    pub fn cells(&self) -> &[TileType] {
        self.tiles.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_grass() {
        let grid = CityGrid::new(4, 4);
        assert_eq!(grid.get(0, 0), TileType::Grass);
        assert_eq!(grid.get(3, 3), TileType::Grass);
    }

    #[test]
    fn test_out_of_bounds_reads_void_writes_noop() {
        let mut grid = CityGrid::new(4, 4);
        assert_eq!(grid.get(-1, 0), TileType::Void);
        assert_eq!(grid.get(4, 0), TileType::Void);
        grid.set(-1, -1, TileType::Street);
        grid.set(100, 100, TileType::Street);
        grid.fill(-5, -5, 100, 100, TileType::Plaza);
        assert_eq!(grid.get(0, 0), TileType::Plaza);
    }

    #[test]
    fn test_safe_set_protects_structures() {
        let mut grid = CityGrid::new(8, 8);
        grid.set(2, 2, TileType::Street);
        grid.safe_fill(0, 0, 7, 7, TileType::BuildingLow);
        assert_eq!(grid.get(2, 2), TileType::Street);
        assert_eq!(grid.get(0, 0), TileType::BuildingLow);
    }

    #[test]
    fn test_fill_normalizes_corners() {
        let mut grid = CityGrid::new(8, 8);
        grid.fill(5, 6, 2, 3, TileType::Alley);
        assert_eq!(grid.get(2, 3), TileType::Alley);
        assert_eq!(grid.get(5, 6), TileType::Alley);
        assert_eq!(grid.get(1, 3), TileType::Grass);
    }

    #[test]
    fn test_region_is_background() {
        let mut grid = CityGrid::new(8, 8);
        assert!(grid.region_is_background(0, 0, 3, 3));
        grid.set(1, 1, TileType::Wall);
        assert!(!grid.region_is_background(0, 0, 3, 3));
        // Footprints hanging off the map are rejected
        assert!(!grid.region_is_background(6, 6, 8, 8));
    }
}
