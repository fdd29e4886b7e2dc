//! City generation library
//!
//! Procedurally generates the static tile grid for an isometric city —
//! streets, sidewalks, alleys, buildings, plazas, landmarks — plus the
//! walkability queries and static light catalog derived from it.
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod config;
pub mod export;
pub mod gen;
pub mod grid;
pub mod lights;
pub mod plan;
pub mod query;
pub mod seeds;
pub mod tilemap;
pub mod tiles;
pub mod world;

pub use config::GenConfig;
pub use grid::CityGrid;
pub use lights::{LightCategory, LightSource};
pub use plan::CityPlan;
pub use seeds::CitySeeds;
pub use tiles::TileType;
pub use world::CityWorld;
