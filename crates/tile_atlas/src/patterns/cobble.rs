//! Cobblestone: random gray stones, softened by a smoothing pass.
use rand::RngCore;

use crate::patterns::{rand_range, scaled, TileGenerator};
use crate::raster::filter::smooth;
use crate::raster::{Color, Tile};

const GROUT: Color = Color::gray(110);
const STONES: usize = 40;
const MIN_RADIUS: i32 = 2;
const MAX_RADIUS: i32 = 5;
const MIN_SHADE: i32 = 90;
const MAX_SHADE: i32 = 140;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cobble;

impl TileGenerator for Cobble {
    fn generate(&self, size: u32, rng: &mut dyn RngCore) -> Tile {
        let mut tile = Tile::new(size, GROUT);
        let min_r = scaled(MIN_RADIUS, size).max(1);
        let max_r = scaled(MAX_RADIUS, size).max(min_r);

        for _ in 0..STONES {
            let x = rand_range(rng, 0, size as i32);
            let y = rand_range(rng, 0, size as i32);
            let r = rand_range(rng, min_r, max_r + 1);
            let shade = rand_range(rng, MIN_SHADE, MAX_SHADE + 1) as u8;
            tile.fill_disk(x, y, r, Color::gray(shade));
        }

        smooth(&tile)
    }
}
