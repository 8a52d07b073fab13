//! Bookshelf: rows of colored spines.
use rand::RngCore;

use crate::patterns::{band_bounds, scaled, TileGenerator};
use crate::raster::{Color, Tile};

const SHELF: Color = Color::rgb(70, 40, 20);
const SPINE_ACCENT: Color = Color::rgb(230, 220, 180);
const SPINES: [Color; 4] = [
    Color::rgb(150, 40, 40),
    Color::rgb(40, 90, 160),
    Color::rgb(50, 120, 60),
    Color::rgb(160, 120, 40),
];
const SHELF_ROWS: u32 = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Books;

impl Books {
    pub fn render(size: u32) -> Tile {
        let mut tile = Tile::new(size, SHELF);
        let last = size as i32 - 1;
        let accent_x = scaled(4, size);
        for (i, span) in band_bounds(size, SHELF_ROWS).into_iter().enumerate() {
            let (y0, y1) = (span.start as i32, span.end as i32 - 1);
            tile.fill_rect(0, y0, last, y1, SPINES[i % SPINES.len()]);
            tile.line(accent_x, y0, accent_x, y1, SPINE_ACCENT);
        }
        tile
    }
}

impl TileGenerator for Books {
    fn generate(&self, size: u32, _rng: &mut dyn RngCore) -> Tile {
        Self::render(size)
    }
}
