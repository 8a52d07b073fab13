//! Shape drawing on tiles.
//!
//! Rectangle bounds are inclusive on both ends. Everything is clipped to the tile.
use super::{Color, Tile};

impl Tile {
    /// Fills the whole tile.
    pub fn fill(&mut self, color: Color) {
        let size = self.size() as i32;
        self.fill_rect(0, 0, size - 1, size - 1, color);
    }

    /// Fills the inclusive rectangle `[x0, x1] x [y0, y1]`.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let max = self.size() as i32 - 1;
        let (x0, x1) = (x0.max(0), x1.min(max));
        let (y0, y1) = (y0.max(0), y1.min(max));
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Draws the one-pixel border of the inclusive rectangle `[x0, x1] x [y0, y1]`.
    pub fn outline_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.line(x0, y0, x1, y0, color);
        self.line(x0, y1, x1, y1, color);
        self.line(x0, y0, x0, y1, color);
        self.line(x1, y0, x1, y1, color);
    }

    /// Draws a line between two points, both included.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fills every pixel within `radius` of `(cx, cy)`.
    pub fn fill_disk(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r2 = radius * radius;
        for y in (cy - radius)..=(cy + radius) {
            for x in (cx - radius)..=(cx + radius) {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draws a one-pixel ring: pixels whose distance to the center rounds to `radius`.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        // (r - 0.5)^2 <= d^2 < (r + 0.5)^2, scaled by 4 to stay in integers.
        let inner = (2 * radius - 1).max(0).pow(2);
        let outer = (2 * radius + 1).pow(2);
        for y in (cy - radius - 1)..=(cy + radius + 1) {
            for x in (cx - radius - 1)..=(cx + radius + 1) {
                let (dx, dy) = (x - cx, y - cy);
                let d4 = 4 * (dx * dx + dy * dy);
                if d4 >= inner && d4 < outer {
                    self.put(x, y, color);
                }
            }
        }
    }
}
