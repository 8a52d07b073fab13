//! Ordered material registry.
//!
//! A [`Catalog`] binds display names to tile generators in a fixed order. The order is
//! the contract the atlas relies on: entry `i` becomes grid slot `i` (row-major) and
//! legend record `i`.
use std::fmt;

use rand::RngCore;

use crate::patterns::TileGenerator;
use crate::raster::Tile;

mod standard;

/// A named material and the generator that draws it.
#[non_exhaustive]
pub struct MaterialEntry {
    /// Display name, used by the legend.
    pub name: String,
    pub generator: Box<dyn TileGenerator>,
}

impl MaterialEntry {
    pub fn new(name: impl Into<String>, generator: Box<dyn TileGenerator>) -> Self {
        Self {
            name: name.into(),
            generator,
        }
    }

    /// Create an entry from a concrete generator.
    pub fn new_with<G: TileGenerator + 'static>(name: impl Into<String>, generator: G) -> Self {
        Self::new(name, Box::new(generator))
    }

    pub fn generate(&self, size: u32, rng: &mut dyn RngCore) -> Tile {
        self.generator.generate(size, rng)
    }
}

impl fmt::Debug for MaterialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterialEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Materials in atlas order.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<MaterialEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a material.
    pub fn with_material<G: TileGenerator + 'static>(
        mut self,
        name: impl Into<String>,
        generator: G,
    ) -> Self {
        self.push(MaterialEntry::new_with(name, generator));
        self
    }

    /// Append several prepared entries.
    pub fn with_entries(mut self, entries: Vec<MaterialEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn push(&mut self, entry: MaterialEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MaterialEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialEntry> {
        self.entries.iter()
    }

    /// Display names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Index of the first material called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}
