//! Normalize an arbitrary backend value into a canonical `Movie`.

use crate::fields::{
    Record, aliases, as_number, as_record, extract_year, first_movie_id, first_present, first_text,
    normalize_genres, resolve_poster,
};
use catalog::Movie;
use serde_json::Value;

/// Build a `Movie` from any value.
///
/// Returns `None` unless the value is an object with a positive numeric id
/// and a non-blank title. Everything else falls back to a default.
pub fn normalize_movie(raw: &Value) -> Option<Movie> {
    movie_from_record(as_record(raw)?)
}

pub(crate) fn movie_from_record(record: &Record) -> Option<Movie> {
    let id = first_movie_id(record, aliases::MOVIE_ID)?;
    let title = first_text(record, aliases::TITLE)?;

    let year = first_present(record, aliases::YEAR)
        .map(extract_year)
        .unwrap_or(0);
    let rating = first_present(record, aliases::RATING)
        .and_then(as_number)
        .unwrap_or(0.0)
        .max(0.0) as f32;
    let genres = first_present(record, aliases::GENRES)
        .map(normalize_genres)
        .unwrap_or_default();
    let overview = first_text(record, aliases::OVERVIEW).unwrap_or_default();

    Some(Movie {
        id,
        title,
        year,
        rating,
        genres,
        poster: resolve_poster(record),
        overview,
    })
}
