//! Authored city plan
//!
//! Hand-specified content the generator stamps before and between the
//! procedural passes: arterial roads, landmark zones (with decorations and
//! light overlay patterns), district rectangles, named secondary streets,
//! urban hubs and the canonical spawn tile.

use crate::lights::LightCategory;
use crate::tiles::TileType;

/// Position of an arterial road: one full-span row or column.
#[derive(Clone, Copy, Debug)]
pub enum RoadAxis {
    Row(i32),
    Col(i32),
}

/// Cross-section style of an arterial road.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoadStyle {
    /// 5 cells: sidewalk, street, tree lane, street, sidewalk.
    Avenue,
    /// 3 cells of bare street, favela style, no sidewalks.
    Bare,
}

/// A hand-specified primary road spanning the whole map.
#[derive(Clone, Debug)]
pub struct ArterialSpec {
    pub name: &'static str,
    pub axis: RoadAxis,
    pub style: RoadStyle,
}

/// A single decorative point-write inside a landmark zone.
#[derive(Clone, Copy, Debug)]
pub struct Decoration {
    pub x: i32,
    pub y: i32,
    pub tile: TileType,
}

/// Fixed light pattern layered over a landmark, independent of the
/// tile-adjacency scan.
#[derive(Clone, Debug)]
pub enum LightOverlay {
    /// `count` points evenly spaced on a circle.
    Ring {
        cx: i32,
        cy: i32,
        radius: f32,
        count: usize,
        category: LightCategory,
    },
    /// A regular sub-grid across a rectangle.
    Grid {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        stride: i32,
        category: LightCategory,
    },
}

/// A named rectangular landmark zone.
#[derive(Clone, Debug)]
pub struct ZoneSpec {
    pub name: &'static str,
    /// Inclusive rectangle (x1, y1, x2, y2).
    pub rect: (i32, i32, i32, i32),
    pub fill: TileType,
    /// If set, the zone border becomes walls except at these gap
    /// coordinates, which stay the interior fill (guaranteed entrances).
    pub gaps: Option<Vec<(i32, i32)>>,
    pub decorations: Vec<Decoration>,
    pub light_overlays: Vec<LightOverlay>,
}

/// A rectangular district filled by the regular block filler.
#[derive(Clone, Copy, Debug)]
pub struct BlockDistrict {
    pub rect: (i32, i32, i32, i32),
    /// Probability a stride anchor gets a building footprint.
    pub density: f64,
    /// Probability a placed building is tall.
    pub tall_chance: f64,
}

/// A rectangular district filled by the recursive favela generator.
#[derive(Clone, Copy, Debug)]
pub struct FavelaDistrict {
    pub rect: (i32, i32, i32, i32),
}

/// A named secondary street carved over whatever is underneath.
#[derive(Clone, Debug)]
pub struct SecondaryStreet {
    pub name: &'static str,
    /// Rectangle segments, carved in order with unconditional fill.
    pub segments: Vec<(i32, i32, i32, i32)>,
}

/// Everything hand-authored about one city.
#[derive(Clone, Debug)]
pub struct CityPlan {
    pub arterials: Vec<ArterialSpec>,
    pub landmarks: Vec<ZoneSpec>,
    pub blocks: Vec<BlockDistrict>,
    pub favelas: Vec<FavelaDistrict>,
    pub secondary_streets: Vec<SecondaryStreet>,
    /// Urban hub coordinates; light density tiers key off distance to these.
    pub hubs: Vec<(i32, i32)>,
    /// Canonical spawn tile, the flood-fill origin for connectivity checks.
    pub spawn: (i32, i32),
}

impl CityPlan {
    /// Every named street, arterial first — the minimap label anchors.
    pub fn street_names(&self) -> Vec<&'static str> {
        self.arterials
            .iter()
            .map(|r| r.name)
            .chain(self.secondary_streets.iter().map(|s| s.name))
            .collect()
    }

    /// The reference 300x300 city.
    pub fn reference_city() -> Self {
        Self {
            // Painted in order; the main avenue goes last so its
            // cross-section stays intact through every intersection.
            arterials: vec![
                ArterialSpec {
                    name: "Avenida da Estacao",
                    axis: RoadAxis::Col(75),
                    style: RoadStyle::Avenue,
                },
                ArterialSpec {
                    name: "Rua do Porto",
                    axis: RoadAxis::Col(225),
                    style: RoadStyle::Avenue,
                },
                ArterialSpec {
                    name: "Avenida Atlantica",
                    axis: RoadAxis::Row(60),
                    style: RoadStyle::Avenue,
                },
                ArterialSpec {
                    name: "Rua da Colina",
                    axis: RoadAxis::Row(240),
                    style: RoadStyle::Bare,
                },
                ArterialSpec {
                    name: "Avenida Central",
                    axis: RoadAxis::Row(150),
                    style: RoadStyle::Avenue,
                },
            ],
            landmarks: vec![
                ZoneSpec {
                    name: "Shopping Mirante",
                    rect: (30, 80, 62, 110),
                    fill: TileType::Shopping,
                    gaps: None,
                    decorations: vec![
                        Decoration { x: 46, y: 110, tile: TileType::DecorativeEntrance },
                        Decoration { x: 47, y: 110, tile: TileType::DecorativeEntrance },
                        Decoration { x: 30, y: 95, tile: TileType::DecorativeEntrance },
                        Decoration { x: 62, y: 95, tile: TileType::DecorativeEntrance },
                    ],
                    light_overlays: vec![],
                },
                ZoneSpec {
                    name: "Igreja de Sao Benedito",
                    rect: (180, 80, 194, 96),
                    fill: TileType::Church,
                    gaps: None,
                    decorations: vec![
                        Decoration { x: 187, y: 96, tile: TileType::Entrance },
                        Decoration { x: 183, y: 98, tile: TileType::Lamppost },
                        Decoration { x: 191, y: 98, tile: TileType::Lamppost },
                    ],
                    light_overlays: vec![LightOverlay::Ring {
                        cx: 187,
                        cy: 88,
                        radius: 9.0,
                        count: 8,
                        category: LightCategory::Plaza,
                    }],
                },
                ZoneSpec {
                    name: "Estacao Ferroviaria",
                    rect: (90, 170, 130, 200),
                    fill: TileType::Plaza,
                    gaps: None,
                    decorations: vec![
                        Decoration { x: 110, y: 185, tile: TileType::InfoBooth },
                        Decoration { x: 92, y: 172, tile: TileType::StairsUp },
                        Decoration { x: 93, y: 172, tile: TileType::StairsDown },
                        Decoration { x: 128, y: 172, tile: TileType::StairsUp },
                        Decoration { x: 127, y: 172, tile: TileType::StairsDown },
                        Decoration { x: 95, y: 198, tile: TileType::Lamppost },
                        Decoration { x: 125, y: 198, tile: TileType::Lamppost },
                        Decoration { x: 100, y: 190, tile: TileType::Bench },
                        Decoration { x: 120, y: 190, tile: TileType::Bench },
                    ],
                    light_overlays: vec![LightOverlay::Grid {
                        x1: 90,
                        y1: 170,
                        x2: 130,
                        y2: 200,
                        stride: 8,
                        category: LightCategory::Street,
                    }],
                },
                ZoneSpec {
                    name: "Praca das Palmeiras",
                    rect: (148, 160, 168, 190),
                    fill: TileType::Plaza,
                    gaps: Some(vec![(158, 160), (158, 190), (148, 175), (168, 175)]),
                    decorations: vec![
                        Decoration { x: 158, y: 175, tile: TileType::Fountain },
                        Decoration { x: 154, y: 170, tile: TileType::Bench },
                        Decoration { x: 162, y: 170, tile: TileType::Bench },
                        Decoration { x: 154, y: 180, tile: TileType::Bench },
                        Decoration { x: 162, y: 180, tile: TileType::Bench },
                        Decoration { x: 152, y: 165, tile: TileType::DominoTable },
                        Decoration { x: 164, y: 165, tile: TileType::DominoTable },
                        Decoration { x: 151, y: 163, tile: TileType::Tree },
                        Decoration { x: 165, y: 163, tile: TileType::Tree },
                        Decoration { x: 151, y: 187, tile: TileType::Tree },
                        Decoration { x: 165, y: 187, tile: TileType::Tree },
                        Decoration { x: 153, y: 168, tile: TileType::Lamppost },
                        Decoration { x: 163, y: 168, tile: TileType::Lamppost },
                        Decoration { x: 153, y: 182, tile: TileType::Lamppost },
                        Decoration { x: 163, y: 182, tile: TileType::Lamppost },
                    ],
                    light_overlays: vec![],
                },
                ZoneSpec {
                    name: "Largo do Monumento",
                    rect: (160, 250, 190, 280),
                    fill: TileType::Plaza,
                    gaps: None,
                    decorations: vec![
                        Decoration { x: 175, y: 265, tile: TileType::Monument },
                        Decoration { x: 168, y: 258, tile: TileType::Bench },
                        Decoration { x: 182, y: 258, tile: TileType::Bench },
                        Decoration { x: 168, y: 272, tile: TileType::Bench },
                        Decoration { x: 182, y: 272, tile: TileType::Bench },
                    ],
                    light_overlays: vec![LightOverlay::Grid {
                        x1: 160,
                        y1: 250,
                        x2: 190,
                        y2: 280,
                        stride: 9,
                        category: LightCategory::Plaza,
                    }],
                },
                ZoneSpec {
                    name: "Parque do Leste",
                    rect: (240, 100, 270, 130),
                    fill: TileType::Grass,
                    gaps: None,
                    decorations: vec![
                        Decoration { x: 245, y: 105, tile: TileType::Tree },
                        Decoration { x: 255, y: 110, tile: TileType::Tree },
                        Decoration { x: 265, y: 105, tile: TileType::Tree },
                        Decoration { x: 248, y: 122, tile: TileType::Tree },
                        Decoration { x: 260, y: 125, tile: TileType::Tree },
                        Decoration { x: 252, y: 115, tile: TileType::Bench },
                        Decoration { x: 258, y: 115, tile: TileType::Bench },
                        Decoration { x: 240, y: 100, tile: TileType::Fence },
                        Decoration { x: 270, y: 100, tile: TileType::Fence },
                        Decoration { x: 240, y: 130, tile: TileType::Fence },
                        Decoration { x: 270, y: 130, tile: TileType::Fence },
                    ],
                    light_overlays: vec![],
                },
            ],
            blocks: vec![
                BlockDistrict { rect: (10, 10, 60, 50), density: 0.7, tall_chance: 0.3 },
                BlockDistrict { rect: (90, 10, 140, 50), density: 0.6, tall_chance: 0.5 },
                BlockDistrict { rect: (90, 70, 140, 140), density: 0.6, tall_chance: 0.35 },
                BlockDistrict { rect: (186, 104, 216, 140), density: 0.65, tall_chance: 0.4 },
                BlockDistrict { rect: (10, 170, 60, 230), density: 0.7, tall_chance: 0.2 },
                BlockDistrict { rect: (240, 68, 290, 95), density: 0.6, tall_chance: 0.3 },
            ],
            favelas: vec![
                FavelaDistrict { rect: (150, 10, 220, 55) },
                FavelaDistrict { rect: (232, 162, 290, 232) },
                FavelaDistrict { rect: (10, 250, 70, 290) },
                FavelaDistrict { rect: (80, 250, 140, 290) },
            ],
            secondary_streets: vec![
                SecondaryStreet {
                    name: "Rua do Mercado",
                    // Stops just short of Avenida Central's sidewalk
                    segments: vec![(120, 8, 121, 147)],
                },
                SecondaryStreet {
                    name: "Travessa do Alto",
                    segments: vec![(10, 210, 88, 211), (88, 210, 89, 239)],
                },
                SecondaryStreet {
                    name: "Rua Nova",
                    segments: vec![(260, 162, 261, 238)],
                },
            ],
            // Shopping center and train station anchor the light density tiers.
            hubs: vec![(46, 95), (110, 185)],
            spawn: (150, 151),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_city_has_all_landmarks() {
        let plan = CityPlan::reference_city();
        assert_eq!(plan.landmarks.len(), 6);
        assert_eq!(plan.hubs.len(), 2);
        assert!(!plan.favelas.is_empty());
        assert!(!plan.blocks.is_empty());
    }

    #[test]
    fn test_street_names_cover_arterials_and_secondaries() {
        let plan = CityPlan::reference_city();
        let names = plan.street_names();
        assert_eq!(names.len(), plan.arterials.len() + plan.secondary_streets.len());
        assert!(names.contains(&"Avenida Central"));
        assert!(names.contains(&"Rua do Mercado"));
    }

    #[test]
    fn test_walled_plaza_gaps_lie_on_border() {
        let plan = CityPlan::reference_city();
        let plaza = plan
            .landmarks
            .iter()
            .find(|z| z.gaps.is_some())
            .expect("reference city has a walled plaza");
        let (x1, y1, x2, y2) = plaza.rect;
        for &(gx, gy) in plaza.gaps.as_ref().unwrap() {
            let on_border = gx == x1 || gx == x2 || gy == y1 || gy == y2;
            assert!(on_border, "gap ({gx},{gy}) must be a border cell");
        }
    }

    #[test]
    fn test_decorations_stay_inside_walled_border() {
        let plan = CityPlan::reference_city();
        for zone in plan.landmarks.iter().filter(|z| z.gaps.is_some()) {
            let (x1, y1, x2, y2) = zone.rect;
            for d in &zone.decorations {
                assert!(
                    d.x > x1 && d.x < x2 && d.y > y1 && d.y < y2,
                    "{}: decoration at ({},{}) touches the enclosure border",
                    zone.name,
                    d.x,
                    d.y
                );
            }
        }
    }
}
