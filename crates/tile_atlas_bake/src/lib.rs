#![forbid(unsafe_code)]
//! Writes a `tile_atlas` build to disk: the atlas as an RGB PNG and the legend as CSV.

mod bake;
mod logging;

pub use bake::{
    bake, write_atlas_png, write_legend_csv, AtlasPaths, BakeError, BakeOptions, Result,
    DEFAULT_OUT_DIR,
};
pub use logging::{init_tracing, DEFAULT_LOG_LEVEL};
