//! Banded stripe tiles.
use std::ops::Range;

use rand::RngCore;

use crate::patterns::TileGenerator;
use crate::raster::{Color, Tile};

/// Direction the bands run across the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Bands stacked top to bottom.
    Horizontal,
    /// Bands side by side, left to right.
    Vertical,
}

/// Pixel span of each band when `size` is split into `bands` parts.
///
/// Each bound is computed from its own index, so the spans partition `0..size` with no
/// gaps or overlaps. `bands` is clamped to `1..=size`.
pub fn band_bounds(size: u32, bands: u32) -> Vec<Range<u32>> {
    if size == 0 {
        return Vec::new();
    }
    let bands = bands.clamp(1, size) as u64;
    let size_u = size as u64;
    (0..bands)
        .map(|i| ((i * size_u / bands) as u32)..(((i + 1) * size_u / bands) as u32))
        .collect()
}

/// Alternating `a`/`b` bands, starting with `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stripes {
    pub a: Color,
    pub b: Color,
    pub orientation: Orientation,
    pub bands: u32,
}

impl Stripes {
    pub fn new(a: Color, b: Color, orientation: Orientation, bands: u32) -> Self {
        Self {
            a,
            b,
            orientation,
            bands,
        }
    }

    pub fn steel() -> Self {
        Self::new(
            Color::rgb(155, 165, 175),
            Color::rgb(220, 230, 240),
            Orientation::Horizontal,
            8,
        )
    }

    pub fn brushed_copper() -> Self {
        Self::new(
            Color::rgb(184, 115, 51),
            Color::rgb(196, 138, 76),
            Orientation::Vertical,
            10,
        )
    }

    pub fn render(&self, size: u32) -> Tile {
        let mut tile = Tile::new(size, self.a);
        let last = size as i32 - 1;
        for (i, span) in band_bounds(size, self.bands).into_iter().enumerate() {
            let color = if i % 2 == 0 { self.a } else { self.b };
            let (start, end) = (span.start as i32, span.end as i32 - 1);
            match self.orientation {
                Orientation::Vertical => tile.fill_rect(start, 0, end, last, color),
                Orientation::Horizontal => tile.fill_rect(0, start, last, end, color),
            }
        }
        tile
    }
}

impl TileGenerator for Stripes {
    fn generate(&self, size: u32, _rng: &mut dyn RngCore) -> Tile {
        self.render(size)
    }
}
