//! Secondary street overlay
//!
//! Carves the named secondary streets after the blocks and favelas are
//! filled, with unconditional writes: these streets intentionally cut
//! across whatever was generated underneath, which is how named,
//! minimap-labelable streets end up inside procedurally-filled districts.

use crate::grid::CityGrid;
use crate::plan::CityPlan;
use crate::tiles::TileType;

/// Carve every secondary street in the plan, in order.
pub fn carve_secondary_streets(grid: &mut CityGrid, plan: &CityPlan) {
    for street in &plan.secondary_streets {
        for &(x1, y1, x2, y2) in &street.segments {
            grid.fill(x1, y1, x2, y2, TileType::Street);
        }
    }
}
