//! Two-color tiles blended by fractal hash noise.
use rand::RngCore;

use crate::noise::blend_weight;
use crate::patterns::TileGenerator;
use crate::raster::{Color, Tile};

/// Blends `base` towards `variant` per pixel by [`blend_weight`].
///
/// Fully deterministic: the RNG is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseTile {
    pub base: Color,
    pub variant: Color,
    /// Noise seed; decorrelates materials that share colors.
    pub seed: i32,
    /// Extra octaves on top of the base three.
    pub rough: u32,
}

impl NoiseTile {
    pub fn new(base: Color, variant: Color, seed: i32, rough: u32) -> Self {
        Self {
            base,
            variant,
            seed,
            rough,
        }
    }

    pub fn dirt() -> Self {
        Self::new(Color::rgb(90, 62, 40), Color::rgb(120, 85, 55), 8, 2)
    }

    pub fn grass_top() -> Self {
        Self::new(Color::rgb(36, 120, 36), Color::rgb(60, 180, 60), 7, 2)
    }

    pub fn sand() -> Self {
        Self::new(Color::rgb(194, 178, 128), Color::rgb(210, 200, 150), 11, 1)
    }

    pub fn snow() -> Self {
        Self::new(Color::rgb(235, 240, 250), Color::rgb(255, 255, 255), 21, 0)
    }

    pub fn concrete() -> Self {
        Self::new(Color::gray(130), Color::gray(180), 77, 1)
    }

    pub fn obsidian() -> Self {
        Self::new(Color::rgb(10, 10, 20), Color::rgb(30, 20, 60), 101, 2)
    }

    /// Renders the tile without any randomness.
    pub fn render(&self, size: u32) -> Tile {
        Tile::from_fn(size, |x, y| {
            let t = blend_weight(x as i32, y as i32, self.seed, self.rough);
            self.base.lerp(self.variant, t)
        })
    }
}

impl TileGenerator for NoiseTile {
    fn generate(&self, size: u32, _rng: &mut dyn RngCore) -> Tile {
        self.render(size)
    }
}
