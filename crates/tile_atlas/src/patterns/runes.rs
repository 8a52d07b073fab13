//! Rune-carved tiles: concentric rings, radial spokes, and scattered glyph dots.
use glam::Vec2;
use rand::RngCore;

use crate::patterns::{scaled, scatter, TileGenerator};
use crate::raster::{Color, Tile};

const RING_RADII: [i32; 3] = [5, 9, 13];
const SPOKE_LENGTH: i32 = 13;
const SPOKES: u32 = 8;
const GLYPH_DOTS: usize = 35;
const GLYPH_MARGIN: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runes {
    pub background: Color,
    pub rune: Color,
}

impl Default for Runes {
    fn default() -> Self {
        Self {
            background: Color::rgb(20, 20, 22),
            rune: Color::rgb(80, 180, 255),
        }
    }
}

impl Runes {
    pub fn new(background: Color, rune: Color) -> Self {
        Self { background, rune }
    }

    /// Rings and spokes only; the part that does not depend on the RNG.
    pub fn render_sigil(&self, size: u32) -> Tile {
        let mut tile = Tile::new(size, self.background);
        let c = (size / 2) as i32;

        for r in RING_RADII {
            tile.circle(c, c, scaled(r, size), self.rune);
        }

        let len = scaled(SPOKE_LENGTH, size) as f32;
        for k in 0..SPOKES {
            let dir = Vec2::from_angle((k as f32 * 45.0).to_radians());
            let tip = dir * len;
            tile.line(c, c, c + tip.x as i32, c + tip.y as i32, self.rune);
        }

        tile
    }
}

impl TileGenerator for Runes {
    fn generate(&self, size: u32, rng: &mut dyn RngCore) -> Tile {
        let mut tile = self.render_sigil(size);
        let margin = scaled(GLYPH_MARGIN, size);
        scatter(
            &mut tile,
            rng,
            GLYPH_DOTS,
            margin,
            size as i32 - margin,
            self.rune,
        );
        tile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::test_support::FixedRng;

    #[test]
    fn sigil_has_center_spokes_and_rings() {
        let runes = Runes::default();
        let tile = runes.render_sigil(32);
        assert_eq!(tile.get(16, 16), Some(runes.rune));
        // Spoke tips along the axes.
        assert_eq!(tile.get(29, 16), Some(runes.rune));
        assert_eq!(tile.get(16, 29), Some(runes.rune));
        assert_eq!(tile.get(3, 16), Some(runes.rune));
        // Inner ring, off the spokes.
        assert_eq!(tile.get(14, 11), Some(runes.rune));
        assert_eq!(tile.get(0, 0), Some(runes.background));
    }

    #[test]
    fn border_stays_clear_of_glyphs() {
        let runes = Runes::new(Color::BLACK, Color::WHITE);
        for value in [0, u32::MAX / 3, u32::MAX] {
            let mut rng = FixedRng { value };
            let tile = runes.generate(32, &mut rng);
            for i in 0..32 {
                for edge in [0, 1, 2, 30, 31] {
                    assert_eq!(tile.get(i, edge), Some(Color::BLACK));
                    assert_eq!(tile.get(edge, i), Some(Color::BLACK));
                }
            }
        }
    }

    #[test]
    fn dots_land_inside_margin() {
        let runes = Runes::new(Color::BLACK, Color::WHITE);
        let mut rng = FixedRng { value: u32::MAX };
        let tile = runes.generate(32, &mut rng);
        assert_eq!(tile.get(28, 28), Some(Color::WHITE));
    }
}
