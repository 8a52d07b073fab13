use tile_atlas::prelude::*;

#[test]
fn standard_catalog_fills_default_atlas() {
    let catalog = Catalog::standard();
    let build = build_atlas(&catalog, &AtlasConfig::default(), 2024).expect("build");

    assert_eq!((build.atlas.width(), build.atlas.height()), (256, 256));
    assert_eq!(build.atlas.as_raw().len(), 256 * 256 * 3);
    assert_eq!(build.legend.len(), 64);
}

#[test]
fn legend_csv_lists_every_slot() {
    let catalog = Catalog::standard();
    let build = build_atlas(&catalog, &AtlasConfig::default(), 5).expect("build");
    let csv = build.legend.to_csv();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 65);
    assert_eq!(lines[0], "index,tile_x,tile_y,name");
    assert_eq!(lines[1], "0,0,0,Stone");
    assert_eq!(lines[64], "63,7,7,Bookshelf");
    for (i, line) in lines[1..].iter().enumerate() {
        assert!(line.starts_with(&format!("{i},")), "line {i}: {line}");
    }
}

#[test]
fn legend_coordinates_locate_the_named_tile() {
    let catalog = Catalog::standard();
    let config = AtlasConfig::default();
    let build = build_atlas(&catalog, &config, 77).expect("build");

    let lamp = build.legend.find("Lamp").expect("lamp record");
    let index = config.slot_index(lamp.tile_x, lamp.tile_y);
    assert_eq!(index, lamp.index);
    assert_eq!(build.atlas.tile(index).expect("tile"), Lamp::render(32));

    let books = build.legend.find("Bookshelf").expect("books record");
    assert_eq!((books.tile_x, books.tile_y), (7, 7));
    assert_eq!(build.atlas.tile(books.index).expect("tile"), Books::render(32));
}

#[test]
fn small_catalog_on_large_grid_is_padded() {
    let catalog = Catalog::new()
        .with_material("Snow", NoiseTile::snow())
        .with_material("Steel", Stripes::steel());
    let config = AtlasConfig::new(16, 4);
    let build = build_atlas(&catalog, &config, 0).expect("build");

    let fallback = fallback_generator().render(16);
    for index in 2..16 {
        assert_eq!(build.atlas.tile(index).expect("tile"), fallback);
        let record = build.legend.get(index).expect("record");
        assert_eq!(record.name, format!("Slot {index}"));
    }
    assert_eq!(build.atlas.tile(0).expect("tile"), NoiseTile::snow().render(16));
}

#[test]
fn equal_seeds_give_identical_builds() {
    let catalog = Catalog::standard();
    let config = AtlasConfig::new(16, 8);
    let a = build_atlas(&catalog, &config, 99).expect("a");
    let b = build_atlas(&catalog, &config, 99).expect("b");
    assert_eq!(a.atlas.as_raw(), b.atlas.as_raw());
    assert_eq!(a.legend, b.legend);
}

#[test]
fn standard_catalog_does_not_fit_a_smaller_grid() {
    let err = build_atlas(&Catalog::standard(), &AtlasConfig::new(32, 7), 0).unwrap_err();
    assert!(matches!(
        err,
        Error::CatalogOverflow {
            entries: 64,
            capacity: 49
        }
    ));
}

#[test]
fn other_tile_sizes_scale_the_atlas() {
    let config = AtlasConfig::default().with_tile_size(64);
    let build = build_atlas(&Catalog::standard(), &config, 1).expect("build");
    assert_eq!(build.atlas.width(), 512);
    assert_eq!(build.atlas.tile(21).expect("tile"), Lamp::render(64));
}
