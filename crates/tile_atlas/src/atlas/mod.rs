//! Atlas compositor.
//!
//! [`composite`] walks the grid row-major, asks each catalog entry for a tile, and pastes
//! it at `(x * tile_size, y * tile_size)`. Slots past the end of the catalog receive the
//! [`fallback_generator`] tile, so every pixel of the atlas is always written. A catalog
//! larger than the grid is rejected rather than truncated.
//!
//! The legend for the same traversal lives in [`legend`]; [`build_atlas`] produces both.
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::patterns::{Checker, TileGenerator};
use crate::raster::{Color, Tile};

pub mod legend;

use legend::{build_legend, Legend};

/// Largest atlas edge accepted by [`AtlasConfig::validate`].
pub const MAX_ATLAS_EXTENT: u32 = 16_384;

/// Grid geometry for an atlas.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtlasConfig {
    /// Edge length of one tile in pixels.
    pub tile_size: u32,
    /// Number of tiles along each edge of the grid.
    pub grid_size: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tile_size: 32,
            grid_size: 8,
        }
    }
}

impl AtlasConfig {
    pub fn new(tile_size: u32, grid_size: u32) -> Self {
        Self {
            tile_size,
            grid_size,
        }
    }

    /// Sets the tile size.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Sets the grid size.
    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Number of slots in the grid.
    pub fn capacity(&self) -> usize {
        (self.grid_size as usize) * (self.grid_size as usize)
    }

    /// Edge length of the atlas in pixels.
    pub fn atlas_extent(&self) -> u32 {
        self.tile_size * self.grid_size
    }

    /// Grid coordinates `(tile_x, tile_y)` of a row-major slot index.
    pub fn slot_position(&self, index: usize) -> (u32, u32) {
        let g = self.grid_size.max(1) as usize;
        ((index % g) as u32, (index / g) as u32)
    }

    /// Row-major slot index of grid coordinates.
    pub fn slot_index(&self, tile_x: u32, tile_y: u32) -> usize {
        (tile_y as usize) * (self.grid_size as usize) + tile_x as usize
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(Error::InvalidConfig("tile_size must be > 0".into()));
        }
        if self.grid_size == 0 {
            return Err(Error::InvalidConfig("grid_size must be > 0".into()));
        }
        match self.tile_size.checked_mul(self.grid_size) {
            Some(extent) if extent <= MAX_ATLAS_EXTENT => Ok(()),
            _ => Err(Error::InvalidConfig(format!(
                "atlas extent {}x{} tiles of {}px exceeds {MAX_ATLAS_EXTENT}px",
                self.grid_size, self.grid_size, self.tile_size
            ))),
        }
    }

    /// Rejects catalogs with more entries than the grid has slots.
    pub fn check_capacity(&self, entries: usize) -> Result<()> {
        let capacity = self.capacity();
        if entries > capacity {
            return Err(Error::CatalogOverflow { entries, capacity });
        }
        Ok(())
    }
}

/// The tile used for slots the catalog does not cover: a fine neutral-gray checker.
pub fn fallback_generator() -> Checker {
    Checker::new(Color::gray(80), Color::gray(100), 8)
}

/// Legend name of a slot filled by the fallback tile.
pub fn fallback_name(index: usize) -> String {
    format!("Slot {index}")
}

/// Derives the RNG seed for a slot from the build seed.
///
/// Slots get independent streams, so a tile's random details do not depend on how many
/// draws earlier slots made.
pub fn seed_for_slot(base_seed: u64, index: usize) -> u64 {
    let mixed = base_seed ^ (index as u64).wrapping_mul(0x9E3779B97F4A7C15);
    mix_u64(mixed)
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// A composed atlas: interleaved RGB8, row-major, `atlas_extent` pixels on each edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Atlas {
    config: AtlasConfig,
    data: Vec<u8>,
}

impl Atlas {
    /// Creates a black atlas for a validated configuration.
    fn new(config: AtlasConfig) -> Self {
        let extent = config.atlas_extent() as usize;
        Self {
            config,
            data: vec![0; extent * extent * 3],
        }
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.config.atlas_extent()
    }

    pub fn height(&self) -> u32 {
        self.config.atlas_extent()
    }

    pub fn tile_size(&self) -> u32 {
        self.config.tile_size
    }

    pub fn grid_size(&self) -> u32 {
        self.config.grid_size
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the atlas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let w = self.width();
        if x >= w || y >= self.height() {
            return None;
        }
        let i = ((y as usize) * (w as usize) + (x as usize)) * 3;
        Some(Color::rgb(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Copies a tile into the slot at grid coordinates `(tile_x, tile_y)`.
    fn paste(&mut self, tile: &Tile, tile_x: u32, tile_y: u32) {
        let size = self.config.tile_size as usize;
        let stride = self.width() as usize * 3;
        let x0 = tile_x as usize * size * 3;
        let y0 = tile_y as usize * size;
        for y in 0..size {
            let start = (y0 + y) * stride + x0;
            let row = &mut self.data[start..start + size * 3];
            for (dst, c) in row.chunks_exact_mut(3).zip(tile.row(y as u32)) {
                dst.copy_from_slice(&c.to_array());
            }
        }
    }

    /// Extracts the tile stored in a slot.
    pub fn tile(&self, index: usize) -> Result<Tile> {
        self.check_slot(index)?;
        let (tx, ty) = self.config.slot_position(index);
        let size = self.config.tile_size;
        Ok(Tile::from_fn(size, |x, y| {
            self.pixel(tx * size + x, ty * size + y)
                .unwrap_or_default()
        }))
    }

    /// Normalized texture coordinates `(min, max)` of a slot.
    pub fn uv_rect(&self, index: usize) -> Result<(Vec2, Vec2)> {
        self.check_slot(index)?;
        let (tx, ty) = self.config.slot_position(index);
        let cell = 1.0 / self.config.grid_size as f32;
        let min = Vec2::new(tx as f32, ty as f32) * cell;
        Ok((min, min + Vec2::splat(cell)))
    }

    fn check_slot(&self, index: usize) -> Result<()> {
        let capacity = self.config.capacity();
        if index >= capacity {
            return Err(Error::SlotOutOfRange { index, capacity });
        }
        Ok(())
    }

    /// Interleaved RGB8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Composes the atlas, giving every slot its own RNG derived from `seed` via
/// [`seed_for_slot`]. Equal seeds produce byte-identical atlases.
pub fn composite(catalog: &Catalog, config: &AtlasConfig, seed: u64) -> Result<Atlas> {
    composite_internal(catalog, config, |index, generator, size| {
        let mut rng = StdRng::seed_from_u64(seed_for_slot(seed, index));
        generator.generate(size, &mut rng)
    })
}

/// Composes the atlas, threading one caller-owned RNG through the slots in order.
pub fn composite_with_rng(
    catalog: &Catalog,
    config: &AtlasConfig,
    rng: &mut dyn RngCore,
) -> Result<Atlas> {
    composite_internal(catalog, config, |_, generator, size| {
        generator.generate(size, &mut *rng)
    })
}

fn composite_internal<F>(catalog: &Catalog, config: &AtlasConfig, mut render: F) -> Result<Atlas>
where
    F: FnMut(usize, &dyn TileGenerator, u32) -> Tile,
{
    config.validate()?;
    config.check_capacity(catalog.len())?;

    let capacity = config.capacity();
    info!(
        "Compositing {} materials into {}x{} grid | atlas: {}px.",
        catalog.len(),
        config.grid_size,
        config.grid_size,
        config.atlas_extent(),
    );

    let fallback = fallback_generator();
    let mut atlas = Atlas::new(*config);

    for index in 0..capacity {
        let (tx, ty) = config.slot_position(index);
        let tile = match catalog.get(index) {
            Some(entry) => {
                debug!("Slot {} ({}, {}): '{}'.", index, tx, ty, entry.name);
                render(index, entry.generator.as_ref(), config.tile_size)
            }
            None => render(index, &fallback, config.tile_size),
        };

        if tile.size() != config.tile_size {
            return Err(Error::TileSizeMismatch {
                index,
                expected: config.tile_size,
                actual: tile.size(),
            });
        }
        atlas.paste(&tile, tx, ty);
    }

    if catalog.len() < capacity {
        warn!(
            "Catalog covers {} of {} slots; filled {} with the fallback tile.",
            catalog.len(),
            capacity,
            capacity - catalog.len(),
        );
    }

    Ok(atlas)
}

/// An atlas together with its legend.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct AtlasBuild {
    pub atlas: Atlas,
    pub legend: Legend,
}

/// Composes the atlas with [`composite`] and builds the matching legend.
pub fn build_atlas(catalog: &Catalog, config: &AtlasConfig, seed: u64) -> Result<AtlasBuild> {
    let legend = build_legend(catalog, config.grid_size)?;
    let atlas = composite(catalog, config, seed)?;
    Ok(AtlasBuild { atlas, legend })
}
