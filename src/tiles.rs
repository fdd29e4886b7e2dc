//! Tile taxonomy
//!
//! The closed set of cell kinds the generator can emit, plus the
//! walkability and collision classifications the query layer is built on.

/// Every kind of cell the city grid can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum TileType {
    /// Out-of-map background; also the sentinel for out-of-bounds reads.
    Void,
    /// Road lane.
    Street,
    /// Paved strip flanking a street.
    Sidewalk,
    /// Narrow connective passage between buildings.
    Alley,
    /// One/two story building.
    BuildingLow,
    /// Taller residential block.
    BuildingTall,
    /// Open paved public square.
    Plaza,
    /// Open unpaved ground, the default background.
    #[default]
    Grass,
    /// Church footprint.
    Church,
    /// Shopping center footprint.
    Shopping,
    /// Placed street lamp.
    Lamppost,
    /// Enclosure wall around a landmark zone.
    Wall,
    StairsUp,
    StairsDown,
    /// Scripted transition cell (building doors, station turnstiles).
    Entrance,
    Fence,
    Tree,
    Bench,
    Fountain,
    DominoTable,
    Monument,
    /// Walk-through archway; cosmetic, not scripted.
    DecorativeEntrance,
    /// Station information booth; solid like a building.
    InfoBooth,
}

impl TileType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TileType::Void => "Void",
            TileType::Street => "Street",
            TileType::Sidewalk => "Sidewalk",
            TileType::Alley => "Alley",
            TileType::BuildingLow => "Low building",
            TileType::BuildingTall => "Tall building",
            TileType::Plaza => "Plaza",
            TileType::Grass => "Grass",
            TileType::Church => "Church",
            TileType::Shopping => "Shopping center",
            TileType::Lamppost => "Lamppost",
            TileType::Wall => "Wall",
            TileType::StairsUp => "Stairs (up)",
            TileType::StairsDown => "Stairs (down)",
            TileType::Entrance => "Entrance",
            TileType::Fence => "Fence",
            TileType::Tree => "Tree",
            TileType::Bench => "Bench",
            TileType::Fountain => "Fountain",
            TileType::DominoTable => "Domino table",
            TileType::Monument => "Monument",
            TileType::DecorativeEntrance => "Archway",
            TileType::InfoBooth => "Information booth",
        }
    }

    /// Entities can stand on these.
    pub fn is_walkable(&self) -> bool {
        matches!(
            self,
            TileType::Street
                | TileType::Sidewalk
                | TileType::Alley
                | TileType::Plaza
                | TileType::Grass
                | TileType::StairsUp
                | TileType::StairsDown
                | TileType::Entrance
                | TileType::DecorativeEntrance
        )
    }

    /// Occupied by a building volume (renders as a tall solid).
    pub fn is_building(&self) -> bool {
        matches!(
            self,
            TileType::BuildingLow | TileType::BuildingTall | TileType::Shopping | TileType::InfoBooth
        )
    }

    /// Solid mass the connectivity leak pass is allowed to punch through.
    pub fn is_punchable(&self) -> bool {
        matches!(
            self,
            TileType::BuildingLow | TileType::BuildingTall | TileType::Wall
        )
    }

    /// Background types that `safe_set`/`safe_fill` may overwrite.
    pub fn is_background(&self) -> bool {
        matches!(self, TileType::Grass | TileType::Void)
    }

    /// Single-character glyph for ASCII map previews.
    pub fn ascii_char(&self) -> char {
        match self {
            TileType::Void => ' ',
            TileType::Street => '=',
            TileType::Sidewalk => '-',
            TileType::Alley => '.',
            TileType::BuildingLow => 'b',
            TileType::BuildingTall => 'B',
            TileType::Plaza => '_',
            TileType::Grass => ',',
            TileType::Church => '+',
            TileType::Shopping => 'S',
            TileType::Lamppost => '!',
            TileType::Wall => '#',
            TileType::StairsUp => '<',
            TileType::StairsDown => '>',
            TileType::Entrance => 'E',
            TileType::Fence => 'f',
            TileType::Tree => 'T',
            TileType::Bench => 'n',
            TileType::Fountain => 'o',
            TileType::DominoTable => 'd',
            TileType::Monument => 'M',
            TileType::DecorativeEntrance => 'A',
            TileType::InfoBooth => 'i',
        }
    }

    /// RGB color for PNG map export.
    pub fn map_color(&self) -> [u8; 3] {
        match self {
            TileType::Void => [0, 0, 0],
            TileType::Street => [70, 70, 75],
            TileType::Sidewalk => [150, 145, 135],
            TileType::Alley => [105, 100, 95],
            TileType::BuildingLow => [170, 110, 80],
            TileType::BuildingTall => [130, 80, 70],
            TileType::Plaza => [200, 185, 160],
            TileType::Grass => [95, 140, 70],
            TileType::Church => [230, 225, 210],
            TileType::Shopping => [210, 160, 60],
            TileType::Lamppost => [250, 240, 150],
            TileType::Wall => [90, 85, 85],
            TileType::StairsUp => [180, 180, 190],
            TileType::StairsDown => [140, 140, 155],
            TileType::Entrance => [60, 120, 160],
            TileType::Fence => [120, 95, 60],
            TileType::Tree => [45, 95, 45],
            TileType::Bench => [145, 110, 75],
            TileType::Fountain => [110, 170, 210],
            TileType::DominoTable => [160, 140, 100],
            TileType::Monument => [215, 210, 200],
            TileType::DecorativeEntrance => [175, 150, 120],
            TileType::InfoBooth => [200, 70, 60],
        }
    }
}
