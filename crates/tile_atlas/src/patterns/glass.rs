//! Glass panes.
use rand::RngCore;

use crate::patterns::TileGenerator;
use crate::raster::{Color, Tile};

const FRAME: Color = Color::gray(200);

/// Black pane with a light frame, tinted cross bars, and a diagonal dither in the tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glass {
    pub tint: Color,
}

impl Default for Glass {
    fn default() -> Self {
        Self {
            tint: Color::rgb(130, 200, 235),
        }
    }
}

impl Glass {
    pub fn new(tint: Color) -> Self {
        Self { tint }
    }

    pub fn render(&self, size: u32) -> Tile {
        let mut tile = Tile::new(size, Color::BLACK);
        let last = size as i32 - 1;
        let mid = (size / 2) as i32;

        tile.outline_rect(0, 0, last, last, FRAME);
        tile.line(0, mid, last, mid, self.tint);
        tile.line(mid, 0, mid, last, self.tint);

        for y in 0..size as i32 {
            for x in 0..size as i32 {
                if (x + y) % 3 == 0 {
                    tile.put(x, y, self.tint);
                }
            }
        }

        tile
    }
}

impl TileGenerator for Glass {
    fn generate(&self, size: u32, _rng: &mut dyn RngCore) -> Tile {
        self.render(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_bars_and_dither() {
        let glass = Glass::default();
        let tile = glass.render(32);
        assert_eq!(tile.get(0, 1), Some(FRAME));
        assert_eq!(tile.get(31, 1), Some(FRAME));
        assert_eq!(tile.get(1, 1), Some(Color::BLACK));
        assert_eq!(tile.get(5, 16), Some(glass.tint));
        assert_eq!(tile.get(16, 5), Some(glass.tint));
        // Dither wins over the frame.
        assert_eq!(tile.get(0, 0), Some(glass.tint));
        assert_eq!(tile.get(2, 1), Some(glass.tint));
    }

    #[test]
    fn roughly_a_third_is_dithered() {
        let tile = Glass::new(Color::WHITE).render(30);
        let tinted = tile.pixels().iter().filter(|c| **c == Color::WHITE).count();
        assert!(tinted >= 300);
        assert!(tinted < 30 * 30 / 2);
    }
}
