#![forbid(unsafe_code)]
//! tile_atlas: Procedural material tiles packed into a texture atlas with a legend.
//!
//! Modules:
//! - noise: integer hash noise and its layered (fractal) variant
//! - raster: colors, tile buffers, and the shape drawing used by the patterns
//! - patterns: tile generators (noise, checker, stripes, planks, bricks, ore, runes, ...)
//! - catalog: ordered material registry, including the standard 64-entry catalog
//! - atlas: grid configuration, compositor, and legend builder
//!
//! For the PNG/CSV writer and the `make-atlas` binary, see the `tile_atlas_bake` crate.
pub mod atlas;
pub mod catalog;
pub mod error;
pub mod noise;
pub mod patterns;
pub mod raster;

/// Convenient re-exports for common types. Import with `use tile_atlas::prelude::*;`.
pub mod prelude {
    pub use crate::atlas::legend::{build_legend, Legend, LegendRecord};
    pub use crate::atlas::{
        build_atlas, composite, composite_with_rng, fallback_generator, seed_for_slot, Atlas,
        AtlasBuild, AtlasConfig,
    };
    pub use crate::catalog::{Catalog, MaterialEntry};
    pub use crate::error::{Error, Result};
    pub use crate::noise::{blend_weight, fractal_noise, hash_noise};
    pub use crate::patterns::{
        Books, Bricks, Checker, Cobble, Glass, GrassSide, Lamp, Leaves, NoiseTile, Ore,
        Orientation, Planks, Runes, Stripes, TileGenerator,
    };
    pub use crate::raster::{Color, Tile};
}
