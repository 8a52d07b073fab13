//! Tile generators for the material catalog.
//!
//! Each generator is a small parameter struct implementing [`TileGenerator`]. Generators
//! that scatter details (knots, specks, dots, blobs) draw every random decision from the
//! RNG passed to [`TileGenerator::generate`], so a seeded RNG reproduces a tile exactly.
//!
//! Layout constants are authored for a 32 px tile and scale with the requested size.
use rand::RngCore;

use crate::raster::{Color, Tile};

pub mod books;
pub mod bricks;
pub mod checker;
pub mod cobble;
pub mod glass;
pub mod grass_side;
pub mod lamp;
pub mod noise_tile;
pub mod planks;
pub mod runes;
pub mod speckle;
pub mod stripes;

pub use books::Books;
pub use bricks::Bricks;
pub use checker::Checker;
pub use cobble::Cobble;
pub use glass::Glass;
pub use grass_side::GrassSide;
pub use lamp::Lamp;
pub use noise_tile::NoiseTile;
pub use planks::Planks;
pub use runes::Runes;
pub use speckle::{Leaves, Ore};
pub use stripes::{band_bounds, Orientation, Stripes};

/// Edge length the layout constants were authored for.
pub const REFERENCE_TILE_SIZE: u32 = 32;

/// Trait for tile generation.
pub trait TileGenerator: Send + Sync {
    fn generate(&self, size: u32, rng: &mut dyn RngCore) -> Tile;
}

impl<F> TileGenerator for F
where
    F: Fn(u32, &mut dyn RngCore) -> Tile + Send + Sync,
{
    fn generate(&self, size: u32, rng: &mut dyn RngCore) -> Tile {
        self(size, rng)
    }
}

/// Scales a layout constant authored for [`REFERENCE_TILE_SIZE`] to `size`.
#[inline]
pub(crate) fn scaled(value: i32, size: u32) -> i32 {
    value * size as i32 / REFERENCE_TILE_SIZE as i32
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}

/// Generate a random integer in `[lo, hi)`. Returns `lo` for an empty range.
#[inline]
pub(crate) fn rand_range(rng: &mut dyn RngCore, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo) as u64;
    lo + ((rng.next_u32() as u64 * span) >> 32) as i32
}

/// Paints `count` single pixels of `color` at random positions in `[lo, hi)` on both axes.
pub(crate) fn scatter(
    tile: &mut Tile,
    rng: &mut dyn RngCore,
    count: usize,
    lo: i32,
    hi: i32,
    color: Color,
) {
    for _ in 0..count {
        let x = rand_range(rng, lo, hi);
        let y = rand_range(rng, lo, hi);
        tile.put(x, y, color);
    }
}


#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::test_support::FixedRng;
    use super::*;

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one() {
        let mut rng = FixedRng { value: u32::MAX };
        let v = rand01(&mut rng);
        assert!(v < 1.0);
        assert!(v > 0.999);
    }

    #[test]
    fn rand_range_covers_bounds() {
        let mut low = FixedRng { value: 0 };
        let mut high = FixedRng { value: u32::MAX };
        assert_eq!(rand_range(&mut low, 3, 29), 3);
        assert_eq!(rand_range(&mut high, 3, 29), 28);
        assert_eq!(rand_range(&mut high, 5, 5), 5);
    }

    #[test]
    fn rand_range_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let v = rand_range(&mut rng, -2, 6);
            assert!((-2..6).contains(&v));
        }
    }

    #[test]
    fn scaled_is_identity_at_reference_size() {
        assert_eq!(scaled(13, REFERENCE_TILE_SIZE), 13);
        assert_eq!(scaled(13, 64), 26);
        assert_eq!(scaled(9, 16), 4);
    }

    #[test]
    fn closures_are_generators() {
        let gen = |size: u32, _rng: &mut dyn RngCore| Tile::new(size, Color::WHITE);
        let mut rng = FixedRng { value: 1 };
        let tile = gen.generate(4, &mut rng);
        assert_eq!(tile.size(), 4);
        assert_eq!(tile.get(3, 3), Some(Color::WHITE));
    }
}
