//! Wooden plank tiles.
use rand::RngCore;

use crate::patterns::{rand01, scaled, NoiseTile, TileGenerator};
use crate::raster::{Color, Tile};

const DIVIDER: Color = Color::rgb(60, 40, 25);
const KNOT: Color = Color::rgb(50, 50, 50);
const KNOT_CHANCE: f64 = 0.6;

/// Noise-grained boards separated by dark horizontal seams, with random knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planks {
    pub base: Color,
    pub variant: Color,
    /// Number of boards stacked vertically.
    pub count: u32,
    pub seed: i32,
}

impl Default for Planks {
    fn default() -> Self {
        Self {
            base: Color::rgb(130, 95, 60),
            variant: Color::rgb(90, 65, 45),
            count: 4,
            seed: 0,
        }
    }
}

impl Planks {
    pub fn new(base: Color, variant: Color, count: u32, seed: i32) -> Self {
        Self {
            base,
            variant,
            count,
            seed,
        }
    }

    /// Oak-colored planks with the given noise seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Board height in pixels.
    pub fn board_height(&self, size: u32) -> u32 {
        let count = self.count.clamp(1, size.max(1));
        (size / count).max(1)
    }
}

impl TileGenerator for Planks {
    fn generate(&self, size: u32, rng: &mut dyn RngCore) -> Tile {
        let mut tile = NoiseTile::new(self.base, self.variant, self.seed, 1).render(size);
        let count = self.count.clamp(1, size.max(1)) as i32;
        let h = self.board_height(size) as i32;
        let last = size as i32 - 1;

        for i in 1..count {
            tile.line(0, i * h, last, i * h, DIVIDER);
        }

        let knot_columns = [scaled(6, size), scaled(25, size)];
        for i in 0..count {
            let y = (i as f64 * h as f64 + h as f64 * 0.2) as i32;
            for x in knot_columns {
                if rand01(rng) < KNOT_CHANCE {
                    tile.fill_disk(x, y, 1, KNOT);
                }
            }
        }

        tile
    }
}
