//! The in-memory catalog and its lookups.
//!
//! A `Catalog` owns its movies and keeps an id index next to them. Once
//! built it is never mutated, so it can be shared freely across threads
//! and tasks without synchronization.

use crate::error::{CatalogError, Result};
use crate::types::{Movie, MovieId};
use std::collections::{BTreeSet, HashMap};

/// Immutable set of movies with O(1) lookup by id
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_id: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Build a catalog from a list of movies, preserving their order.
    ///
    /// Fails when two movies share an id or when a movie has an id of 0
    /// or a blank title.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(movies.len());

        for (position, movie) in movies.iter().enumerate() {
            if movie.id == 0 {
                return Err(CatalogError::InvalidMovie {
                    id: movie.id,
                    reason: "id must be positive".to_string(),
                });
            }
            if movie.title.trim().is_empty() {
                return Err(CatalogError::InvalidMovie {
                    id: movie.id,
                    reason: "title is empty".to_string(),
                });
            }
            if let Some(&existing) = by_id.get(&movie.id) {
                let first: &Movie = &movies[existing];
                return Err(CatalogError::DuplicateId {
                    id: movie.id,
                    first: first.title.clone(),
                    second: movie.title.clone(),
                });
            }
            by_id.insert(movie.id, position);
        }

        Ok(Self { movies, by_id })
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Get a movie by ID
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.by_id.get(&id).map(|&position| &self.movies[position])
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Case-insensitive title search.
    ///
    /// A blank query matches every movie.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.movies.iter().collect();
        }

        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Unique genres across the catalog, sorted
    pub fn all_genres(&self) -> Vec<String> {
        self.movies
            .iter()
            .flat_map(|movie| movie.genres.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Keep only the movies tagged with `genre`; `None` keeps everything.
pub fn filter_by_genre<'a>(movies: Vec<&'a Movie>, genre: Option<&str>) -> Vec<&'a Movie> {
    match genre {
        Some(genre) => movies
            .into_iter()
            .filter(|movie| movie.has_genre(genre))
            .collect(),
        None => movies,
    }
}
