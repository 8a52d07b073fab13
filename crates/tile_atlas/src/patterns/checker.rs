//! Checkerboard tiles.
use rand::RngCore;

use crate::patterns::TileGenerator;
use crate::raster::{Color, Tile};

/// A `cells` x `cells` checkerboard. Block `(bx, by)` is `a` when `bx + by` is even.
///
/// Block edge is `size / cells`; when that does not divide evenly the last row and
/// column of blocks absorb the remainder, so every pixel belongs to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checker {
    pub a: Color,
    pub b: Color,
    pub cells: u32,
}

impl Checker {
    pub fn new(a: Color, b: Color, cells: u32) -> Self {
        Self { a, b, cells }
    }

    /// Block index of a pixel coordinate along one axis.
    pub fn block_of(&self, size: u32, coord: u32) -> u32 {
        let cells = self.cells.clamp(1, size.max(1));
        let step = (size / cells).max(1);
        (coord / step).min(cells - 1)
    }

    pub fn render(&self, size: u32) -> Tile {
        Tile::from_fn(size, |x, y| {
            if (self.block_of(size, x) + self.block_of(size, y)) % 2 == 0 {
                self.a
            } else {
                self.b
            }
        })
    }
}

impl TileGenerator for Checker {
    fn generate(&self, size: u32, _rng: &mut dyn RngCore) -> Tile {
        self.render(size)
    }
}
