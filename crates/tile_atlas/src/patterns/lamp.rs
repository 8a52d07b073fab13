//! Lamp: a glowing panel in a dark housing.
use rand::RngCore;

use crate::patterns::{scaled, TileGenerator};
use crate::raster::{Color, Tile};

const HOUSING: Color = Color::gray(30);
const RIM: Color = Color::gray(80);
const GLOW: Color = Color::rgb(245, 220, 120);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lamp;

impl Lamp {
    pub fn render(size: u32) -> Tile {
        let mut tile = Tile::new(size, HOUSING);
        let last = size as i32 - 1;
        let rim = scaled(6, size);
        let glow = scaled(9, size);
        tile.outline_rect(rim, rim, last - rim, last - rim, RIM);
        tile.fill_rect(glow, glow, last - glow, last - glow, GLOW);
        tile
    }
}

impl TileGenerator for Lamp {
    fn generate(&self, size: u32, _rng: &mut dyn RngCore) -> Tile {
        Self::render(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn housing_rim_and_glow() {
        let tile = Lamp::render(32);
        assert_eq!(tile.get(0, 0), Some(HOUSING));
        assert_eq!(tile.get(6, 6), Some(RIM));
        assert_eq!(tile.get(25, 12), Some(RIM));
        assert_eq!(tile.get(7, 7), Some(HOUSING));
        assert_eq!(tile.get(9, 9), Some(GLOW));
        assert_eq!(tile.get(22, 22), Some(GLOW));
        assert_eq!(tile.get(23, 23), Some(HOUSING));
    }
}
