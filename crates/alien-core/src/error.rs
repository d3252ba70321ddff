//! Error types for the alien species catalog

use thiserror::Error;

/// Errors raised by the catalog and its query service
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("Alien species not found")]
    SpeciesNotFound,

    #[error("dataset must contain at least one record")]
    EmptyDataset,

    #[error("record {species:?} has an invalid {field}: {value}")]
    InvalidRecord {
        species: String,
        field: &'static str,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
