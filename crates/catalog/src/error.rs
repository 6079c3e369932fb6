//! Error types for the catalog crate.

use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur while building a catalog
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    /// Two entries share the same id
    #[error("Duplicate movie id {id} ({first} / {second})")]
    DuplicateId {
        id: MovieId,
        first: String,
        second: String,
    },

    /// An entry breaks the Movie invariants
    #[error("Invalid movie {id}: {reason}")]
    InvalidMovie { id: MovieId, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
