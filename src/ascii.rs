//! ASCII rendering of city maps
//!
//! Terminal-friendly preview of the finished grid, one glyph per tile,
//! plus a legend. Mostly used from the CLI while tuning a plan.

use std::fs::File;
use std::io::{self, Write};

use crate::grid::CityGrid;
use crate::tiles::TileType;

/// Render the whole grid as one glyph per cell, row per line.
pub fn render_grid(grid: &CityGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            out.push(grid.get(x, y).ascii_char());
        }
        out.push('\n');
    }
    out
}

/// Legend of glyphs for the tile kinds that actually appear in the grid.
pub fn render_legend(grid: &CityGrid) -> String {
    let mut present: Vec<TileType> = Vec::new();
    for (_, _, tile) in grid.iter() {
        if !present.contains(&tile) {
            present.push(tile);
        }
    }
    let mut out = String::new();
    for tile in present {
        out.push_str(&format!("  {}  {}\n", tile.ascii_char(), tile.display_name()));
    }
    out
}

/// Write the ASCII map (and legend) to a file.
pub fn export_ascii(grid: &CityGrid, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(render_grid(grid).as_bytes())?;
    file.write_all(b"\n")?;
    file.write_all(render_legend(grid).as_bytes())?;
    Ok(())
}
