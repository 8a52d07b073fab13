//! Legend mapping atlas slots to material names.
//!
//! The legend walks the grid in the same row-major order as the compositor, so record
//! `i` always describes the tile pasted into slot `i`.
use crate::atlas::fallback_name;
use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Header row of the CSV rendering.
pub const CSV_HEADER: &str = "index,tile_x,tile_y,name";

/// One grid slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegendRecord {
    pub index: usize,
    pub tile_x: u32,
    pub tile_y: u32,
    pub name: String,
}

impl LegendRecord {
    /// `index,tile_x,tile_y,name`. Names containing commas, quotes, or line breaks are quoted.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.index,
            self.tile_x,
            self.tile_y,
            csv_field(&self.name)
        )
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

/// Ordered legend records, one per grid slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legend {
    records: Vec<LegendRecord>,
}

impl Legend {
    pub fn records(&self) -> &[LegendRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LegendRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LegendRecord> {
        self.records.iter()
    }

    /// First record with the given material name.
    pub fn find(&self, name: &str) -> Option<&LegendRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Header plus one line per record, joined by `\n` without a trailing newline.
    pub fn to_csv(&self) -> String {
        std::iter::once(CSV_HEADER.to_owned())
            .chain(self.records.iter().map(LegendRecord::to_csv_line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builds the legend for `catalog` laid out on a `grid_size` x `grid_size` grid.
///
/// Slots past the end of the catalog are named after their index, matching the fallback
/// tiles the compositor places there.
pub fn build_legend(catalog: &Catalog, grid_size: u32) -> Result<Legend> {
    if grid_size == 0 {
        return Err(Error::InvalidConfig("grid_size must be > 0".into()));
    }
    let g = grid_size as usize;
    let capacity = g * g;
    if catalog.len() > capacity {
        return Err(Error::CatalogOverflow {
            entries: catalog.len(),
            capacity,
        });
    }

    let records = (0..capacity)
        .map(|index| LegendRecord {
            index,
            tile_x: (index % g) as u32,
            tile_y: (index / g) as u32,
            name: catalog
                .get(index)
                .map(|e| e.name.clone())
                .unwrap_or_else(|| fallback_name(index)),
        })
        .collect();

    Ok(Legend { records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Cobble, Lamp};

    #[test]
    fn records_follow_row_major_order() {
        let catalog = Catalog::new()
            .with_material("Lamp", Lamp)
            .with_material("Cobble", Cobble);
        let legend = build_legend(&catalog, 3).expect("legend");

        assert_eq!(legend.len(), 9);
        for (i, record) in legend.iter().enumerate() {
            assert_eq!(record.index, i);
            assert_eq!(record.tile_x, (i % 3) as u32);
            assert_eq!(record.tile_y, (i / 3) as u32);
        }
        assert_eq!(legend.get(1).map(|r| r.name.as_str()), Some("Cobble"));
        assert_eq!(legend.get(2).map(|r| r.name.as_str()), Some("Slot 2"));
        assert_eq!(legend.find("Lamp").map(|r| r.index), Some(0));
    }

    #[test]
    fn csv_has_header_and_no_trailing_newline() {
        let catalog = Catalog::new().with_material("Lamp", Lamp);
        let csv = build_legend(&catalog, 2).expect("legend").to_csv();
        let lines: Vec<_> = csv.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "index,tile_x,tile_y,name",
                "0,0,0,Lamp",
                "1,1,0,Slot 1",
                "2,0,1,Slot 2",
                "3,1,1,Slot 3",
            ]
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn awkward_names_are_quoted() {
        let record = LegendRecord {
            index: 4,
            tile_x: 0,
            tile_y: 1,
            name: "Stone, \"rough\"".into(),
        };
        assert_eq!(record.to_csv_line(), "4,0,1,\"Stone, \"\"rough\"\"\"");
    }

    #[test]
    fn overflow_and_zero_grid_are_errors() {
        let catalog = Catalog::new()
            .with_material("A", Lamp)
            .with_material("B", Lamp);
        assert!(matches!(
            build_legend(&catalog, 1),
            Err(Error::CatalogOverflow {
                entries: 2,
                capacity: 1
            })
        ));
        assert!(matches!(
            build_legend(&catalog, 0),
            Err(Error::InvalidConfig(_))
        ));
    }
}
