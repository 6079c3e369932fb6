//! Genre profile of a movie selection.
//!
//! Counts how often each genre appears across the selected movies and keeps
//! the order in which genres were first seen, so that ties always resolve
//! the same way.

use catalog::Movie;
use std::collections::HashMap;

/// Genre occurrence counts for a selection
#[derive(Debug, Clone, Default)]
pub struct GenreProfile {
    /// (genre, count) in first-appearance order
    counts: Vec<(String, u32)>,
    /// Position of each genre in `counts`
    positions: HashMap<String, usize>,
}

impl GenreProfile {
    /// Build the profile of a selection.
    ///
    /// A genre shared by several selected movies is counted once per movie.
    pub fn from_movies<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> Self {
        let mut profile = Self::default();
        for movie in movies {
            for genre in &movie.genres {
                profile.record(genre);
            }
        }
        profile
    }

    fn record(&mut self, genre: &str) {
        match self.positions.get(genre) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.positions.insert(genre.to_string(), self.counts.len());
                self.counts.push((genre.to_string(), 1));
            }
        }
    }

    /// Occurrences of `genre` in the selection (0 if never seen)
    pub fn count(&self, genre: &str) -> u32 {
        self.positions
            .get(genre)
            .map(|&position| self.counts[position].1)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent genres, ties broken by first appearance
    pub fn top_genres(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<&(String, u32)> = self.counts.iter().collect();
        // stable sort keeps first-appearance order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(genre, _)| genre.as_str())
            .collect()
    }

    /// Genre-overlap score of a candidate: sum of the counts of its genres
    pub fn score(&self, movie: &Movie) -> u32 {
        movie.genres.iter().map(|genre| self.count(genre)).sum()
    }
}
