//! Noise tiles with scattered single-pixel accents.
use rand::RngCore;

use crate::patterns::{scatter, NoiseTile, TileGenerator};
use crate::raster::{Color, Tile};

const ORE_SEED: i32 = 33;
const ORE_ROUGH: u32 = 2;
const ORE_BRIGHTEN: f64 = 1.1;
const ORE_SPECKS: usize = 45;

/// Rock with randomly placed mineral specks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ore {
    pub base: Color,
    pub speck: Color,
}

impl Ore {
    pub fn new(base: Color, speck: Color) -> Self {
        Self { base, speck }
    }

    /// The rock underneath the specks.
    pub fn rock(&self) -> NoiseTile {
        NoiseTile::new(
            self.base,
            self.base.scale(ORE_BRIGHTEN),
            ORE_SEED,
            ORE_ROUGH,
        )
    }
}

impl TileGenerator for Ore {
    fn generate(&self, size: u32, rng: &mut dyn RngCore) -> Tile {
        let mut tile = self.rock().render(size);
        scatter(&mut tile, rng, ORE_SPECKS, 0, size as i32, self.speck);
        tile
    }
}

const LEAF_HIGHLIGHT: Color = Color::rgb(70, 170, 60);
const LEAF_HIGHLIGHTS: usize = 25;

/// Green foliage with bright highlights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leaves;

impl Leaves {
    pub fn canopy() -> NoiseTile {
        NoiseTile::new(Color::rgb(40, 100, 35), Color::rgb(20, 160, 20), 5, 2)
    }
}

impl TileGenerator for Leaves {
    fn generate(&self, size: u32, rng: &mut dyn RngCore) -> Tile {
        let mut tile = Self::canopy().render(size);
        scatter(&mut tile, rng, LEAF_HIGHLIGHTS, 0, size as i32, LEAF_HIGHLIGHT);
        tile
    }
}
