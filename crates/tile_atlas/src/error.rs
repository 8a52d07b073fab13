//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, catalogs that do not fit the grid, out-of-range slots, and
//! generators returning the wrong tile size.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("catalog has {entries} materials but the grid only holds {capacity} slots")]
    CatalogOverflow { entries: usize, capacity: usize },

    #[error("slot {index} is outside the grid ({capacity} slots)")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error("generator for slot {index} produced a {actual}px tile, expected {expected}px")]
    TileSizeMismatch {
        index: usize,
        expected: u32,
        actual: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_keeps_detail() {
        let err = Error::InvalidConfig("grid_size must be > 0".into());
        assert_eq!(err.to_string(), "invalid configuration: grid_size must be > 0");
    }

    #[test]
    fn catalog_overflow_message_names_both_sizes() {
        let err = Error::CatalogOverflow {
            entries: 70,
            capacity: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("70"));
        assert!(msg.contains("64"));
    }

    #[test]
    fn tile_size_mismatch_names_the_slot() {
        let err = Error::TileSizeMismatch {
            index: 5,
            expected: 32,
            actual: 16,
        };
        assert_eq!(
            err.to_string(),
            "generator for slot 5 produced a 16px tile, expected 32px"
        );
    }
}
