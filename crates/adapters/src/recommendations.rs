//! Normalize a recommendation payload into `Recommendation`s.
//!
//! ## Movie resolution (per item)
//! 1. An embedded `movie` / `film` object that normalizes
//! 2. Otherwise the item's `movie_id` / `id`; items without one are dropped
//! 3. A known movie with that id
//! 4. The item itself, for backends that flatten movie fields into it
//! 5. A placeholder movie titled `Pelicula {id}`

use crate::collection::get_collection;
use crate::fields::{Record, aliases, as_number, first_movie_id, first_present, first_text};
use crate::movie::{movie_from_record, normalize_movie};
use catalog::{Movie, MovieId, Recommendation};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Reason shown when the backend does not explain a pick
pub const DEFAULT_REASON: &str =
    "Recomendacion generada por el modelo con base en tus preferencias.";

/// Normalize recommendations, resolving ids against `known_movies`.
///
/// Output order follows the payload. Non-object items and items without any
/// resolvable id are skipped.
pub fn normalize_recommendations(raw: &Value, known_movies: &[Movie]) -> Vec<Recommendation> {
    let movie_by_id: HashMap<MovieId, &Movie> =
        known_movies.iter().map(|movie| (movie.id, movie)).collect();

    get_collection(raw)
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|item| {
            let Some(movie) = resolve_movie(item, &movie_by_id) else {
                debug!("Dropping recommendation without a resolvable movie");
                return None;
            };
            Some(Recommendation {
                movie,
                reason: first_text(item, aliases::REASON)
                    .unwrap_or_else(|| DEFAULT_REASON.to_string()),
                match_percent: match_percent(item),
            })
        })
        .collect()
}

fn resolve_movie(item: &Record, movie_by_id: &HashMap<MovieId, &Movie>) -> Option<Movie> {
    if let Some(embedded) = first_present(item, aliases::EMBEDDED_MOVIE).and_then(normalize_movie)
    {
        return Some(embedded);
    }

    let movie_id = first_movie_id(item, aliases::RECOMMENDED_ID)?;

    if let Some(known) = movie_by_id.get(&movie_id) {
        return Some((*known).clone());
    }

    // Flattened payloads carry title, genres, etc. next to the score
    if let Some(flattened) = movie_from_record(item) {
        return Some(flattened);
    }

    debug!(movie_id, "Using placeholder movie for unknown recommendation");
    Some(Movie::placeholder(movie_id))
}

/// Match percent in [0, 100].
///
/// Values up to 1 are read as probabilities, larger values as percentages.
pub fn match_percent(item: &Record) -> u8 {
    let raw = first_present(item, aliases::MATCH)
        .and_then(as_number)
        .unwrap_or(0.0);
    let percent = if raw <= 1.0 { raw * 100.0 } else { raw };
    percent.round().clamp(0.0, 100.0) as u8
}
