//! The user's movie selection.

use catalog::{Catalog, Movie, MovieId};

/// Number of movies required before recommendations can be requested
pub const SELECTION_SIZE: usize = 5;

/// Result of toggling a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// Selection already full, movie not added
    Full,
}

/// Ordered set of at most five distinct movies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    movies: Vec<Movie>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select catalog movies by id, skipping unknown and repeated ids.
    ///
    /// Ids past the fifth accepted movie are ignored.
    pub fn from_ids(catalog: &Catalog, ids: &[MovieId]) -> Self {
        let mut selection = Self::new();
        for movie in ids.iter().filter_map(|&id| catalog.get(id)) {
            if !selection.contains(movie.id) {
                selection.toggle(movie);
            }
        }
        selection
    }

    /// Remove the movie if selected, add it otherwise
    pub fn toggle(&mut self, movie: &Movie) -> Toggle {
        if let Some(position) = self.movies.iter().position(|m| m.id == movie.id) {
            self.movies.remove(position);
            return Toggle::Removed;
        }
        if self.movies.len() >= SELECTION_SIZE {
            return Toggle::Full;
        }
        self.movies.push(movie.clone());
        Toggle::Added
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Selected ids in selection order
    pub fn ids(&self) -> Vec<MovieId> {
        self.movies.iter().map(|m| m.id).collect()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Exactly five movies selected
    pub fn is_complete(&self) -> bool {
        self.movies.len() == SELECTION_SIZE
    }

    pub fn clear(&mut self) {
        self.movies.clear();
    }
}
