//! Seed management for city generation
//!
//! Provides separate seeds for each randomized generation stage, allowing
//! fine-grained control over which aspects of the city to vary or keep
//! constant. The arterial, landmark and overlay stages are fully authored
//! and draw no randomness, so they carry no seed.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for the randomized generation stages.
///
/// Each stage gets its own seed, derived from a master seed by default,
/// so one stage can be varied in isolation while the rest of the city
/// stays fixed.
#[derive(Clone, Copy, Debug)]
pub struct CitySeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Regular block filling (building anchors, punch-throughs)
    pub blocks: u64,
    /// Recursive favela labyrinth generation
    pub favela: u64,
    /// Global connectivity leak pass
    pub leaks: u64,
    /// Light-source derivation (per-tile gating draws)
    pub lights: u64,
}

impl CitySeeds {
    /// Create seeds from a master seed, deriving all stage seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            blocks: derive_seed(master, "blocks"),
            favela: derive_seed(master, "favela"),
            leaks: derive_seed(master, "leaks"),
            lights: derive_seed(master, "lights"),
        }
    }
}

impl Default for CitySeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

/// Derive a stage seed from the master seed and a stage label.
fn derive_seed(master: u64, label: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    label.hash(&mut hasher);
    hasher.finish()
}
