//! The standard 64-material catalog, one atlas row per group of eight.
use crate::catalog::Catalog;
use crate::patterns::{
    Books, Bricks, Checker, Cobble, Glass, GrassSide, Lamp, Leaves, NoiseTile, Ore, Orientation,
    Planks, Runes, Stripes,
};
use crate::raster::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

fn noise(base: Color, variant: Color, seed: i32, rough: u32) -> NoiseTile {
    NoiseTile::new(base, variant, seed, rough)
}

fn stripes(a: Color, b: Color, orientation: Orientation, bands: u32) -> Stripes {
    Stripes::new(a, b, orientation, bands)
}

const STONE_GRAY: Color = rgb(110, 110, 110);
const BROWN_ROCK: Color = rgb(130, 110, 90);

impl Catalog {
    /// Number of materials in [`Catalog::standard`].
    pub const STANDARD_LEN: usize = 64;

    /// The standard material set, filling an 8x8 atlas exactly.
    pub fn standard() -> Self {
        use Orientation::{Horizontal, Vertical};

        Catalog::new()
            // Terrain
            .with_material("Stone", noise(STONE_GRAY, rgb(150, 150, 150), 1, 2))
            .with_material("Cobblestone", Cobble)
            .with_material("Dirt", NoiseTile::dirt())
            .with_material("Grass Top", NoiseTile::grass_top())
            .with_material("Grass Side", GrassSide)
            .with_material("Sand", NoiseTile::sand())
            .with_material("Snow", NoiseTile::snow())
            .with_material("Gravel", noise(rgb(120, 120, 120), rgb(100, 100, 100), 13, 1))
            // Constructed
            .with_material("Oak Planks", Planks::with_seed(2))
            .with_material(
                "Birch Planks",
                Planks::new(rgb(170, 150, 110), rgb(140, 120, 90), 4, 3),
            )
            .with_material("Brick", Bricks::default())
            .with_material(
                "Stone Bricks",
                Bricks::new(rgb(120, 120, 120), rgb(170, 170, 170), 7, 0),
            )
            .with_material("Glass", Glass::default())
            .with_material("Concrete", NoiseTile::concrete())
            .with_material("Steel", Stripes::steel())
            .with_material("Copper", Stripes::brushed_copper())
            // Organic and special
            .with_material("Leaves", Leaves)
            .with_material(
                "Wood Log",
                stripes(rgb(120, 90, 60), rgb(100, 70, 50), Horizontal, 12),
            )
            .with_material("Clay", noise(rgb(165, 180, 195), rgb(180, 190, 200), 15, 1))
            .with_material(
                "Terracotta",
                noise(rgb(180, 100, 70), rgb(200, 120, 90), 16, 1),
            )
            .with_material("Obsidian", NoiseTile::obsidian())
            .with_material("Lamp", Lamp)
            .with_material("Glow Runes", Runes::new(rgb(15, 15, 20), rgb(40, 220, 255)))
            .with_material("Arcane Runes", Runes::default())
            // Ores
            .with_material("Coal Ore", Ore::new(STONE_GRAY, rgb(25, 25, 25)))
            .with_material("Iron Ore", Ore::new(BROWN_ROCK, rgb(210, 190, 140)))
            .with_material("Gold Ore", Ore::new(BROWN_ROCK, rgb(245, 220, 120)))
            .with_material("Redstone Ore", Ore::new(STONE_GRAY, rgb(200, 40, 40)))
            .with_material("Lapis Ore", Ore::new(STONE_GRAY, rgb(50, 70, 200)))
            .with_material("Emerald Ore", Ore::new(STONE_GRAY, rgb(40, 200, 100)))
            .with_material("Diamond Ore", Ore::new(STONE_GRAY, rgb(120, 200, 240)))
            .with_material("Quartz Ore", Ore::new(rgb(200, 200, 200), rgb(245, 245, 245)))
            // Decorative patterns
            .with_material(
                "Rune Brick",
                Bricks::new(rgb(60, 60, 70), rgb(90, 90, 100), 6, 0),
            )
            .with_material(
                "Chiseled Stone",
                Checker::new(rgb(120, 120, 120), rgb(140, 140, 140), 8),
            )
            .with_material("Tiled Slate", Checker::new(rgb(50, 60, 70), rgb(70, 80, 90), 6))
            .with_material("Mosaic", Checker::new(rgb(120, 90, 60), rgb(170, 130, 80), 4))
            .with_material(
                "Fabric",
                stripes(rgb(120, 60, 60), rgb(150, 90, 90), Horizontal, 10),
            )
            .with_material("Carpet", Checker::new(rgb(160, 40, 40), rgb(180, 60, 60), 8))
            .with_material("Circuit", Checker::new(rgb(25, 25, 28), rgb(35, 35, 40), 4))
            .with_material("Panel", stripes(rgb(60, 60, 70), rgb(80, 80, 90), Vertical, 6))
            // Stone and wood variants
            .with_material(
                "Dark Planks",
                Planks::new(rgb(80, 60, 40), rgb(60, 45, 35), 4, 4),
            )
            .with_material(
                "Sandstone",
                noise(rgb(210, 200, 160), rgb(230, 220, 180), 20, 1),
            )
            .with_material("Ice", Glass::new(rgb(170, 220, 255)))
            .with_material("Marble", noise(rgb(220, 220, 225), rgb(255, 255, 255), 30, 0))
            .with_material("Basalt", noise(rgb(50, 50, 60), rgb(30, 30, 40), 31, 2))
            .with_material("Chalk", noise(rgb(235, 235, 225), rgb(250, 250, 250), 32, 0))
            .with_material(
                "Roof Tiles",
                stripes(rgb(120, 50, 50), rgb(150, 70, 70), Horizontal, 12),
            )
            .with_material("Shingles", Checker::new(rgb(110, 80, 60), rgb(95, 70, 55), 6))
            // Rune family
            .with_material("Rune Copper", Runes::new(rgb(60, 40, 25), rgb(230, 170, 60)))
            .with_material("Rune Emerald", Runes::new(rgb(15, 25, 20), rgb(60, 220, 140)))
            .with_material("Rune Amethyst", Runes::new(rgb(25, 20, 35), rgb(190, 110, 255)))
            .with_material("Rune Sapphire", Runes::new(rgb(15, 20, 35), rgb(90, 150, 255)))
            .with_material("Rune Ruby", Runes::new(rgb(35, 15, 20), rgb(255, 100, 120)))
            .with_material(
                "Gilded Panel",
                Checker::new(rgb(100, 85, 50), rgb(155, 130, 70), 5),
            )
            .with_material(
                "Engraved Gold",
                Checker::new(rgb(180, 150, 60), rgb(220, 200, 120), 6),
            )
            .with_material("Runed Obsidian", Runes::new(rgb(8, 8, 12), rgb(140, 120, 255)))
            // Earth and furnishings
            .with_material("Red Sand", noise(rgb(180, 90, 50), rgb(200, 115, 65), 40, 1))
            .with_material("Mud", noise(rgb(70, 50, 35), rgb(55, 40, 30), 41, 2))
            .with_material("Granite", noise(rgb(150, 105, 90), rgb(175, 130, 115), 42, 2))
            .with_material("Mossy Stone", noise(STONE_GRAY, rgb(70, 120, 60), 43, 2))
            .with_material("Copper Ore", Ore::new(STONE_GRAY, rgb(200, 120, 70)))
            .with_material("Frosted Glass", Glass::new(rgb(200, 220, 235)))
            .with_material(
                "Woven Reed",
                stripes(rgb(170, 150, 90), rgb(150, 130, 75), Vertical, 8),
            )
            .with_material("Bookshelf", Books)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn standard_catalog_fills_an_eight_by_eight_grid() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), Catalog::STANDARD_LEN);
        assert_eq!(catalog.len(), 8 * 8);
    }

    #[test]
    fn names_are_unique() {
        let catalog = Catalog::standard();
        let names: HashSet<_> = catalog.names().collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn order_is_stable() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get(0).map(|e| e.name.as_str()), Some("Stone"));
        assert_eq!(catalog.position("Coal Ore"), Some(24));
        assert_eq!(catalog.position("Runed Obsidian"), Some(55));
        assert_eq!(catalog.get(63).map(|e| e.name.as_str()), Some("Bookshelf"));
    }

    #[test]
    fn every_entry_fills_a_full_tile() {
        let catalog = Catalog::standard();
        let mut rng = StdRng::seed_from_u64(1);
        for entry in catalog.iter() {
            let tile = entry.generate(32, &mut rng);
            assert_eq!(tile.size(), 32, "{}", entry.name);
            assert_eq!(tile.pixels().len(), 32 * 32, "{}", entry.name);
        }
    }
}
