//! Core domain types shared by every crate in the workspace.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Plain value structs with public fields
//! - Serde attributes to control the JSON field names

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases & Constants
// =============================================================================

/// Unique identifier for a movie (TMDb ids in the built-in catalog)
pub type MovieId = u64;

/// Poster used whenever a payload does not carry a usable image
pub const DEFAULT_POSTER: &str = "/placeholder.svg";

// =============================================================================
// Movie
// =============================================================================

/// A movie in canonical form.
///
/// Every `Movie` has a positive id and a non-empty title. Normalization code
/// that cannot establish both yields `None` instead of a `Movie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year, 0 when unknown
    pub year: i32,
    /// Average rating, 0.0 when unknown
    pub rating: f32,
    /// Genres in the order the source listed them
    pub genres: Vec<String>,
    /// Absolute URL or local path, never empty
    pub poster: String,
    pub overview: String,
}

impl Movie {
    /// Minimal stand-in for a movie known only by id.
    pub fn placeholder(id: MovieId) -> Self {
        Self {
            id,
            title: format!("Pelicula {id}"),
            year: 0,
            rating: 0.0,
            genres: Vec::new(),
            poster: DEFAULT_POSTER.to_string(),
            overview: String::new(),
        }
    }

    /// True when the poster is missing or still the default placeholder
    pub fn has_placeholder_poster(&self) -> bool {
        self.poster.is_empty() || self.poster == DEFAULT_POSTER
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

// =============================================================================
// Pages & Recommendations
// =============================================================================

/// One page of movies as returned by the listing and search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviesPage {
    pub items: Vec<Movie>,
    pub page: u32,
    pub page_size: u32,
    pub total: u32,
    pub total_pages: u32,
}

/// A recommended movie together with why it was picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub movie: Movie,
    pub reason: String,
    /// Estimated relevance in [0, 100]
    pub match_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_movie() {
        let movie = Movie::placeholder(999);

        assert_eq!(movie.title, "Pelicula 999");
        assert_eq!(movie.year, 0);
        assert_eq!(movie.rating, 0.0);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.poster, DEFAULT_POSTER);
        assert!(movie.has_placeholder_poster());
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let rec = Recommendation {
            movie: Movie::placeholder(1),
            reason: "x".to_string(),
            match_percent: 87,
        };

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["matchPercent"], 87);
        assert_eq!(json["movie"]["title"], "Pelicula 1");
    }
}
