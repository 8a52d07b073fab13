//! Convolution filters over tiles.
use super::{Color, Tile};

/// 5x5 smoothing kernel: heavy center, light inner ring, faint outer ring. Sums to 100.
const SMOOTH_KERNEL: [[u32; 5]; 5] = [
    [1, 1, 1, 1, 1],
    [1, 5, 5, 5, 1],
    [1, 5, 44, 5, 1],
    [1, 5, 5, 5, 1],
    [1, 1, 1, 1, 1],
];
const SMOOTH_KERNEL_SUM: u32 = 100;

/// Returns a smoothed copy of `tile`. Samples past the edge repeat the border pixel.
pub fn smooth(tile: &Tile) -> Tile {
    let size = tile.size();
    if size == 0 {
        return tile.clone();
    }
    let max = size as i32 - 1;

    Tile::from_fn(size, |x, y| {
        let mut acc = [0u32; 3];
        for (ky, row) in SMOOTH_KERNEL.iter().enumerate() {
            for (kx, &weight) in row.iter().enumerate() {
                let sx = (x as i32 + kx as i32 - 2).clamp(0, max) as u32;
                let sy = (y as i32 + ky as i32 - 2).clamp(0, max) as u32;
                let c = tile.get(sx, sy).unwrap_or_default();
                acc[0] += c.r as u32 * weight;
                acc[1] += c.g as u32 * weight;
                acc[2] += c.b as u32 * weight;
            }
        }
        let half = SMOOTH_KERNEL_SUM / 2;
        Color::rgb(
            ((acc[0] + half) / SMOOTH_KERNEL_SUM) as u8,
            ((acc[1] + half) / SMOOTH_KERNEL_SUM) as u8,
            ((acc[2] + half) / SMOOTH_KERNEL_SUM) as u8,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_weights_sum_to_divisor() {
        let sum: u32 = SMOOTH_KERNEL.iter().flatten().sum();
        assert_eq!(sum, SMOOTH_KERNEL_SUM);
    }

    #[test]
    fn flat_tile_is_unchanged() {
        let tile = Tile::new(6, Color::rgb(110, 50, 200));
        assert_eq!(smooth(&tile), tile);
    }

    #[test]
    fn single_bright_pixel_spreads_to_neighbours() {
        let mut tile = Tile::new(9, Color::BLACK);
        tile.put(4, 4, Color::gray(200));
        let out = smooth(&tile);
        assert_eq!(out.get(4, 4), Some(Color::gray(88)));
        assert_eq!(out.get(5, 4), Some(Color::gray(10)));
        assert_eq!(out.get(6, 6), Some(Color::gray(2)));
        assert_eq!(out.get(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn empty_tile_passes_through() {
        let tile = Tile::new(0, Color::BLACK);
        assert!(smooth(&tile).is_empty());
    }
}
