//! # Catalog Crate
//!
//! Domain types and the static movie catalog used by the MovIA client.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MoviesPage, Recommendation)
//! - **index**: The immutable `Catalog` with id lookup, search and genre filtering
//! - **builtin**: The 35-movie catalog shipped with the client
//! - **error**: Error types for catalog construction
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{builtin, filter_by_genre};
//!
//! let catalog = builtin();
//! let matrix = catalog.get(603).unwrap();
//! let dramas = filter_by_genre(catalog.search(""), Some("Drama"));
//!
//! println!("{} and {} dramas", matrix.title, dramas.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod index;
pub mod builtin;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    MovieId,
    // Core types
    Movie,
    MoviesPage,
    Recommendation,
    // Constants
    DEFAULT_POSTER,
};
pub use index::{Catalog, filter_by_genre};
pub use builtin::builtin;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_movies(Vec::new()).unwrap();

        assert!(catalog.is_empty());
        assert!(catalog.get(603).is_none());
        assert!(catalog.search("matrix").is_empty());
        assert!(catalog.all_genres().is_empty());
    }

    #[test]
    fn test_builtin_search_and_filter() {
        let catalog = builtin();

        let godfathers = catalog.search("godfather");
        assert_eq!(godfathers.len(), 2);

        let crime_godfathers = filter_by_genre(godfathers, Some("Crimen"));
        assert_eq!(crime_godfathers.len(), 2);
    }
}
