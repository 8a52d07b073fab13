//! Colors and tile pixel buffers.
//!
//! A [`Tile`] is a square RGB buffer owned by whoever generated it. The drawing
//! helpers in [`draw`] and the smoothing filter in [`filter`] operate on it in place
//! and silently clip anything outside the tile.
use glam::DVec3;

pub mod draw;
pub mod filter;

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a neutral gray.
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.r as f64, self.g as f64, self.b as f64)
    }

    /// Converts float channels back to a color, clamping to `[0, 255]` and truncating.
    pub fn from_dvec3(v: DVec3) -> Self {
        let c = v.clamp(DVec3::ZERO, DVec3::splat(255.0));
        Self::rgb(c.x as u8, c.y as u8, c.z as u8)
    }

    /// Linear interpolation towards `other`; `t = 0` yields `self`.
    pub fn lerp(self, other: Color, t: f64) -> Self {
        Self::from_dvec3(self.to_dvec3() * (1.0 - t) + other.to_dvec3() * t)
    }

    /// Multiplies every channel by `factor`, clamping the result.
    pub fn scale(self, factor: f64) -> Self {
        Self::from_dvec3(self.to_dvec3() * factor)
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::rgb(value[0], value[1], value[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        value.to_array()
    }
}

/// A square RGB pixel buffer, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    size: u32,
    pixels: Vec<Color>,
}

impl Tile {
    /// Creates a `size` x `size` tile filled with `fill`.
    pub fn new(size: u32, fill: Color) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            pixels: vec![fill; len],
        }
    }

    /// Creates a tile by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(size: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity((size as usize) * (size as usize));
        for y in 0..size {
            for x in 0..size {
                pixels.push(f(x, y));
            }
        }
        Self { size, pixels }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the tile.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.size as usize) + (x as usize)])
    }

    /// Sets the pixel at `(x, y)`; coordinates outside the tile are ignored.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.size as i32 || y >= self.size as i32 {
            return;
        }
        let i = (y as usize) * (self.size as usize) + (x as usize);
        self.pixels[i] = color;
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// A single row of pixels.
    pub fn row(&self, y: u32) -> &[Color] {
        let w = self.size as usize;
        let start = (y as usize) * w;
        &self.pixels[start..start + w]
    }

    /// Packs the pixels into interleaved RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}
