//! Generation stages
//!
//! Each stage writes into the shared grid in pipeline order: arterial
//! roads, landmark zones, regular blocks, favela labyrinths, secondary
//! street overlay, then the global connectivity leak pass.

pub mod arterial;
pub mod blocks;
pub mod favela;
pub mod landmarks;
pub mod leaks;
pub mod overlay;
