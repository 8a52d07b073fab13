//! Side face of a grass block: dirt with a grass fringe fading into it downwards.
use rand::RngCore;

use crate::patterns::{NoiseTile, TileGenerator};
use crate::raster::{Color, Tile};

const FRINGE: Color = Color::rgb(36, 120, 36);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrassSide;

impl GrassSide {
    /// Height of the grass fringe in pixels.
    pub fn fringe_height(size: u32) -> u32 {
        size / 3
    }

    pub fn render(size: u32) -> Tile {
        let dirt = NoiseTile::dirt().render(size);
        let band = size as f64 / 3.0;
        let fringe = Self::fringe_height(size);
        Tile::from_fn(size, |x, y| {
            let below = dirt.get(x, y).unwrap_or_default();
            if y < fringe {
                FRINGE.lerp(below, y as f64 / band)
            } else {
                below
            }
        })
    }
}

impl TileGenerator for GrassSide {
    fn generate(&self, size: u32, _rng: &mut dyn RngCore) -> Tile {
        Self::render(size)
    }
}
