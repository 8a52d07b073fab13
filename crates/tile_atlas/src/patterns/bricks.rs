//! Running-bond brick tiles.
use rand::RngCore;

use crate::noise::hash_noise;
use crate::patterns::TileGenerator;
use crate::raster::{Color, Tile};

/// Bricks per course.
const COLUMNS: i32 = 4;

/// Courses of bricks over a mortar fill; odd courses shift by half a brick.
///
/// Each brick is tinted by `0.9 + 0.2 * noise`, keyed on its column and course, and
/// leaves a one-pixel mortar joint on its right and bottom edge when it is at least three
/// pixels wide or tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bricks {
    pub base: Color,
    pub mortar: Color,
    /// Number of courses.
    pub rows: u32,
    pub seed: i32,
}

impl Default for Bricks {
    fn default() -> Self {
        Self {
            base: Color::rgb(140, 60, 50),
            mortar: Color::gray(190),
            rows: 6,
            seed: 0,
        }
    }
}

impl Bricks {
    pub fn new(base: Color, mortar: Color, rows: u32, seed: i32) -> Self {
        Self {
            base,
            mortar,
            rows,
            seed,
        }
    }

    /// Color of the brick at `column` in course `row`.
    pub fn brick_color(&self, column: i32, row: i32) -> Color {
        let seed = self
            .seed
            .wrapping_add(row.wrapping_mul(31))
            .wrapping_add(column.wrapping_mul(17));
        self.base.scale(0.9 + 0.2 * hash_noise(column, row, seed))
    }

    pub fn render(&self, size: u32) -> Tile {
        let mut tile = Tile::new(size, self.mortar);
        let rows = self.rows.clamp(1, size.max(1));
        let row_h = size as f64 / rows as f64;
        let brick_w = (size as i32 / COLUMNS).max(1);
        let half = brick_w / 2;
        let joint_x = joint(brick_w);
        let last_col = (size as i32 / brick_w).max(COLUMNS);

        for r in 0..rows as i32 {
            let y0 = (r as f64 * row_h) as i32;
            let y_end = ((r + 1) as f64 * row_h) as i32;
            let y1 = y_end - 1 - joint(y_end - y0);
            let offset = if r % 2 == 1 { half } else { 0 };
            // One extra brick on each side so shifted courses reach both edges.
            for col in -1..=last_col {
                let x0 = col * brick_w + offset;
                let x1 = x0 + brick_w - 1 - joint_x;
                tile.fill_rect(x0, y0, x1, y1, self.brick_color(col, r));
            }
        }

        tile
    }
}

/// Mortar joint width for a brick extent. Bricks thinner than three pixels get none.
fn joint(extent: i32) -> i32 {
    if extent >= 3 {
        1
    } else {
        0
    }
}

impl TileGenerator for Bricks {
    fn generate(&self, size: u32, _rng: &mut dyn RngCore) -> Tile {
        self.render(size)
    }
}
