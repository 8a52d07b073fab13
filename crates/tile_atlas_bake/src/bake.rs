use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use thiserror::Error;
use tile_atlas::atlas::legend::Legend;
use tile_atlas::atlas::{build_atlas, Atlas, AtlasConfig};
use tile_atlas::catalog::Catalog;
use tracing::info;

/// Output directory used when none is given.
pub const DEFAULT_OUT_DIR: &str = "build_assets";

#[derive(Debug, Error)]
pub enum BakeError {
    #[error(transparent)]
    Atlas(#[from] tile_atlas::error::Error),

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("atlas buffer of {len} bytes does not hold {width}x{height} RGB8 pixels")]
    Buffer { width: u32, height: u32, len: usize },
}

pub type Result<T> = std::result::Result<T, BakeError>;

/// File locations of one baked atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasPaths {
    pub png: PathBuf,
    pub legend: PathBuf,
}

impl AtlasPaths {
    /// `atlas_{T}px_{G}x{G}.png` and `atlas_{T}px_{G}x{G}_legend.csv` inside `out_dir`.
    pub fn new(out_dir: impl AsRef<Path>, tile_size: u32, grid_size: u32) -> Self {
        let stem = format!("atlas_{tile_size}px_{grid_size}x{grid_size}");
        let dir = out_dir.as_ref();
        Self {
            png: dir.join(format!("{stem}.png")),
            legend: dir.join(format!("{stem}_legend.csv")),
        }
    }
}

/// Bake settings.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeOptions {
    pub out_dir: PathBuf,
    pub config: AtlasConfig,
    pub seed: u64,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            config: AtlasConfig::default(),
            seed: 0,
        }
    }
}

impl BakeOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: AtlasConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn paths(&self) -> AtlasPaths {
        AtlasPaths::new(&self.out_dir, self.config.tile_size, self.config.grid_size)
    }
}

/// Encodes the atlas as an 8-bit RGB PNG.
pub fn write_atlas_png(atlas: &Atlas, path: &Path) -> Result<()> {
    let (width, height) = (atlas.width(), atlas.height());
    let image = RgbImage::from_raw(width, height, atlas.as_raw().to_vec()).ok_or(
        BakeError::Buffer {
            width,
            height,
            len: atlas.as_raw().len(),
        },
    )?;
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Writes the legend CSV as UTF-8.
pub fn write_legend_csv(legend: &Legend, path: &Path) -> Result<()> {
    fs::write(path, legend.to_csv())?;
    Ok(())
}

/// Builds the atlas and legend for `catalog` and writes both into `options.out_dir`.
pub fn bake(catalog: &Catalog, options: &BakeOptions) -> Result<AtlasPaths> {
    options.config.validate()?;
    options.config.check_capacity(catalog.len())?;
    fs::create_dir_all(&options.out_dir)?;

    let build = build_atlas(catalog, &options.config, options.seed)?;
    let paths = options.paths();

    write_atlas_png(&build.atlas, &paths.png)?;
    write_legend_csv(&build.legend, &paths.legend)?;

    info!(
        "Baked {} slots (seed {}) | atlas: {} | legend: {}.",
        build.legend.len(),
        options.seed,
        paths.png.display(),
        paths.legend.display(),
    );

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use tile_atlas::atlas::composite;
    use tile_atlas::error::Error;

    use super::*;

    #[test]
    fn paths_follow_naming_scheme() {
        let paths = AtlasPaths::new("out", 32, 8);
        assert_eq!(paths.png, Path::new("out").join("atlas_32px_8x8.png"));
        assert_eq!(
            paths.legend,
            Path::new("out").join("atlas_32px_8x8_legend.csv")
        );
    }

    #[test]
    fn bake_writes_png_and_legend() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out_dir = dir.path().join("nested").join("assets");
        let options = BakeOptions::new(&out_dir).with_seed(11);

        let paths = bake(&Catalog::standard(), &options).expect("bake");
        assert!(paths.png.starts_with(&out_dir));

        let image = image::open(&paths.png).expect("decode png").to_rgb8();
        assert_eq!(image.dimensions(), (256, 256));
        let expected = composite(&Catalog::standard(), &options.config, 11).expect("atlas");
        assert_eq!(image.as_raw(), expected.as_raw());

        let csv = fs::read_to_string(&paths.legend).expect("read legend");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 65);
        assert_eq!(lines[0], "index,tile_x,tile_y,name");
        assert_eq!(lines[64], "63,7,7,Bookshelf");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out_dir = dir.path().join("never");
        let options = BakeOptions::new(&out_dir).with_config(AtlasConfig::new(0, 8));

        let err = bake(&Catalog::standard(), &options).unwrap_err();
        assert!(matches!(err, BakeError::Atlas(Error::InvalidConfig(_))));
        assert!(!out_dir.exists());
    }

    #[test]
    fn overflow_surfaces_as_atlas_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out_dir = dir.path().join("too-small");
        let options = BakeOptions::new(&out_dir).with_config(AtlasConfig::new(8, 2));

        let err = bake(&Catalog::standard(), &options).unwrap_err();
        assert!(matches!(
            err,
            BakeError::Atlas(Error::CatalogOverflow {
                entries: 64,
                capacity: 4
            })
        ));
        assert!(!out_dir.exists());
    }
}
