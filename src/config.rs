//! Generation tunables
//!
//! Numeric knobs for the generation stages, separated from the authored
//! city plan so tests and tools can vary one without the other.

use serde::{Deserialize, Serialize};

/// Tunable parameters for the generation pipeline.
///
/// Defaults match the reference 300x300 city.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenConfig {
    /// Plant a tree on the arterial center lane every N cells.
    pub arterial_tree_spacing: i32,

    /// Anchor stride for regular block filling (footprint + alley gap).
    pub block_stride: i32,
    /// Building footprint edge for regular blocks.
    pub block_footprint: i32,
    /// Probability an empty anchor becomes a single alley cell instead.
    pub block_residual_alley_chance: f64,
    /// Punch-through slots carved per block edge (min..=max).
    pub block_punch_min: usize,
    pub block_punch_max: usize,

    /// Region edge below which the favela recursion bottoms out.
    pub favela_min_region: i32,
    /// Margin kept on both sides of a favela split coordinate.
    pub favela_split_margin: i32,
    /// Probability a favela corridor is a street rather than an alley.
    pub favela_street_chance: f64,
    /// Probability of one extra perpendicular punch-through per side.
    pub favela_side_punch_chance: f64,
    /// Micro-fill anchor stride in leaf regions.
    pub favela_micro_stride: i32,
    /// Micro-fill building probability per anchor.
    pub favela_build_chance: f64,
    /// Chance a favela building is tall.
    pub favela_tall_chance: f64,

    /// Iterations of the global connectivity leak pass.
    pub leak_iterations: usize,
    /// Interior margin the leak pass samples within.
    pub leak_margin: i32,

    /// Hub distance bands for light density (near, middle).
    pub light_near_radius: f32,
    pub light_mid_radius: f32,
    /// Street glow strides per band (near, middle, far).
    pub glow_stride_near: i32,
    pub glow_stride_mid: i32,
    pub glow_stride_far: i32,
    /// Far-band sidewalk lamp probability (per-tile hash draw).
    pub lamp_far_chance: f64,
    /// Residential window-light probability on the stride grid.
    pub residential_chance: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            arterial_tree_spacing: 10,

            block_stride: 3,
            block_footprint: 2,
            block_residual_alley_chance: 0.3,
            block_punch_min: 2,
            block_punch_max: 4,

            favela_min_region: 10,
            favela_split_margin: 4,
            favela_street_chance: 0.3,
            favela_side_punch_chance: 0.5,
            favela_micro_stride: 2,
            favela_build_chance: 0.8,
            favela_tall_chance: 0.35,

            leak_iterations: 500,
            leak_margin: 5,

            light_near_radius: 45.0,
            light_mid_radius: 90.0,
            glow_stride_near: 5,
            glow_stride_mid: 7,
            glow_stride_far: 10,
            lamp_far_chance: 0.10,
            residential_chance: 0.30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = GenConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.leak_iterations, config.leak_iterations);
        assert_eq!(back.favela_min_region, config.favela_min_region);
    }
}
