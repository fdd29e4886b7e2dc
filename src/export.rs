//! PNG and JSON export of generated cities
//!
//! One pixel per tile, with the light catalog blended on top as bright
//! dots, and a JSON dump of the light records for external tooling.

use std::fs;
use std::io;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::world::CityWorld;

/// Export the grid as a PNG, one pixel per tile, lights blended on top.
pub fn export_map(world: &CityWorld, path: &str) -> Result<(), image::ImageError> {
    let (width, height) = world.dimensions();
    let mut img: RgbImage = ImageBuffer::new(width as u32, height as u32);

    for (x, y, tile) in world.grid().iter() {
        img.put_pixel(x as u32, y as u32, Rgb(tile.map_color()));
    }

    for light in world.lights() {
        if light.x >= 0 && light.y >= 0 && (light.x as usize) < width && (light.y as usize) < height
        {
            let px = img.get_pixel_mut(light.x as u32, light.y as u32);
            *px = Rgb(brighten(px.0));
        }
    }

    img.save(path)
}

fn brighten(rgb: [u8; 3]) -> [u8; 3] {
    [
        rgb[0].saturating_add(70),
        rgb[1].saturating_add(70),
        rgb[2].saturating_add(40),
    ]
}

/// Export the light catalog as pretty-printed JSON.
pub fn export_lights(world: &CityWorld, path: &str) -> io::Result<()> {
    let json = serde_json::to_string_pretty(world.lights())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
