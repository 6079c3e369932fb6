//! Field aliases and value coercion.
//!
//! Backends disagree on field names (`title` vs `name`, `vote_average` vs
//! `rating`, ...) and on types (numbers sent as strings, genres sent as a
//! comma separated string). Every logical attribute gets an ordered alias
//! list here, and every semantic type gets exactly one coercion function.
//! The normalizers only combine the two.

use catalog::{DEFAULT_POSTER, MovieId};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// A JSON object as seen by the normalizers
pub type Record = Map<String, Value>;

/// Accepted field names per logical attribute, in priority order.
pub mod aliases {
    // Ids fall through: an unusable `id` (e.g. "abc") still lets `movie_id` resolve
    pub const MOVIE_ID: &[&str] = &["id", "movie_id"];
    pub const TITLE: &[&str] = &["title", "name"];
    pub const YEAR: &[&str] = &["year", "release_year", "release_date"];
    pub const RATING: &[&str] = &["rating", "vote_average", "score"];
    pub const GENRES: &[&str] = &["genres"];
    pub const GENRE_NAME: &[&str] = &["name", "genre"];
    pub const OVERVIEW: &[&str] = &["overview", "description", "synopsis", "plot"];
    pub const POSTER: &[&str] = &["poster", "poster_url", "poster_path", "image", "image_url"];

    pub const COLLECTION: &[&str] = &["items", "results", "movies", "data", "recommendations"];
    pub const NESTED_ITEMS: &str = "items";

    pub const PAGE: &[&str] = &["page", "current_page", "pageNumber"];
    pub const PAGE_SIZE: &[&str] = &["page_size", "per_page", "pageSize", "limit"];
    pub const TOTAL: &[&str] = &["total", "count", "total_items"];
    pub const TOTAL_PAGES: &[&str] = &["total_pages", "totalPages"];

    pub const EMBEDDED_MOVIE: &[&str] = &["movie", "film"];
    pub const RECOMMENDED_ID: &[&str] = &["movie_id", "id"];
    pub const MATCH: &[&str] = &["probability", "prob", "score", "match_percent", "matchPercent"];
    pub const REASON: &[&str] = &["reason", "explanation"];
}

static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("static year pattern"));

// =============================================================================
// Scalar coercion
// =============================================================================

pub fn as_record(value: &Value) -> Option<&Record> {
    value.as_object()
}

/// Text form of a scalar: strings as-is, numbers and booleans stringified
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Finite number from a JSON number or a numeric string
pub fn as_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Movie ids must be positive whole numbers
pub fn as_movie_id(value: &Value) -> Option<MovieId> {
    let n = as_number(value)?;
    if n < 1.0 || n.fract() != 0.0 || n > MovieId::MAX as f64 {
        return None;
    }
    Some(n as MovieId)
}

/// Year from a number (floored) or from the first 4-digit run in its text
pub fn extract_year(value: &Value) -> i32 {
    if let Some(n) = as_number(value) {
        return n.floor() as i32;
    }

    as_text(value)
        .and_then(|text| {
            FOUR_DIGITS
                .find(&text)
                .and_then(|m| m.as_str().parse::<i32>().ok())
        })
        .unwrap_or(0)
}

/// Genre list from either a delimited string or an array of names/objects
pub fn normalize_genres(value: &Value) -> Vec<String> {
    match value {
        Value::String(raw) => {
            if raw.trim().is_empty() {
                return Vec::new();
            }
            let separator = if raw.contains(',') {
                Some(',')
            } else if raw.contains('|') {
                Some('|')
            } else {
                None
            };
            match separator {
                Some(sep) => raw
                    .split(sep)
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .map(str::to_string)
                    .collect(),
                None => vec![raw.trim().to_string()],
            }
        }
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Object(record) => {
                    first_present(record, aliases::GENRE_NAME)
                        .and_then(as_text)
                        .map(|name| name.trim().to_string())
                }
                _ => None,
            })
            .filter(|g| !g.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

// =============================================================================
// Alias lookups
// =============================================================================

/// First alias whose value is present and not null
pub fn first_present<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

/// First alias whose value coerces to a finite number
pub fn first_number(record: &Record, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(as_number)
}

/// First alias whose value coerces to a movie id
pub fn first_movie_id(record: &Record, keys: &[&str]) -> Option<MovieId> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(as_movie_id)
}

/// First alias whose text form is not blank
pub fn first_text(record: &Record, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .filter_map(as_text)
        .find(|text| !text.trim().is_empty())
}

/// Poster URL or path; relative names become root-relative paths
pub fn resolve_poster(record: &Record) -> String {
    match first_text(record, aliases::POSTER) {
        None => DEFAULT_POSTER.to_string(),
        Some(poster)
            if poster.starts_with("http://")
                || poster.starts_with("https://")
                || poster.starts_with('/') =>
        {
            poster
        }
        Some(poster) => format!("/{poster}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_as_number_accepts_numeric_strings() {
        assert_eq!(as_number(&json!(7.9)), Some(7.9));
        assert_eq!(as_number(&json!(" 12 ")), Some(12.0));
        assert_eq!(as_number(&json!("1e3")), Some(1000.0));
        assert_eq!(as_number(&json!("")), None);
        assert_eq!(as_number(&json!("abc")), None);
        assert_eq!(as_number(&json!("inf")), None);
        assert_eq!(as_number(&json!("NaN")), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&Value::Null), None);
    }

    #[test]
    fn test_as_movie_id_requires_positive_integer() {
        assert_eq!(as_movie_id(&json!(603)), Some(603));
        assert_eq!(as_movie_id(&json!("123")), Some(123));
        assert_eq!(as_movie_id(&json!(12.5)), None);
        assert_eq!(as_movie_id(&json!(-4)), None);
        assert_eq!(as_movie_id(&json!(0)), None);
    }

    #[test]
    fn test_as_text_stringifies_scalars() {
        assert_eq!(as_text(&json!("x")), Some("x".to_string()));
        assert_eq!(as_text(&json!(42)), Some("42".to_string()));
        assert_eq!(as_text(&json!(false)), Some("false".to_string()));
        assert_eq!(as_text(&json!([1])), None);
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year(&json!(1999)), 1999);
        assert_eq!(extract_year(&json!(2001.7)), 2001);
        assert_eq!(extract_year(&json!("2016")), 2016);
        assert_eq!(extract_year(&json!("2016-01-01")), 2016);
        assert_eq!(extract_year(&json!("estreno: 12/05/1985")), 1985);
        assert_eq!(extract_year(&json!("unknown")), 0);
        assert_eq!(extract_year(&Value::Null), 0);
    }

    #[test]
    fn test_genres_from_delimited_strings() {
        assert_eq!(
            normalize_genres(&json!("Action, Comedy, Drama")),
            vec!["Action", "Comedy", "Drama"]
        );
        assert_eq!(normalize_genres(&json!("Drama|Crime| ")), vec!["Drama", "Crime"]);
        assert_eq!(normalize_genres(&json!("  Western ")), vec!["Western"]);
        assert_eq!(normalize_genres(&json!(", ,")), Vec::<String>::new());
        assert!(normalize_genres(&json!("   ")).is_empty());
    }

    #[test]
    fn test_genres_comma_wins_over_pipe() {
        assert_eq!(normalize_genres(&json!("A|B, C")), vec!["A|B", "C"]);
    }

    #[test]
    fn test_genres_from_arrays() {
        let raw = json!([" Drama ", {"name": "Crimen"}, {"genre": "Suspenso"}, 7, null, "", {"id": 3}]);
        assert_eq!(normalize_genres(&raw), vec!["Drama", "Crimen", "Suspenso"]);
        assert!(normalize_genres(&json!(12)).is_empty());
    }

    #[test]
    fn test_first_present_skips_null() {
        let rec = record(json!({"title": null, "name": "Arrival"}));
        assert_eq!(first_present(&rec, aliases::TITLE), Some(&json!("Arrival")));
    }

    #[test]
    fn test_first_text_skips_blank() {
        let rec = record(json!({"overview": "  ", "plot": "Trama"}));
        assert_eq!(first_text(&rec, aliases::OVERVIEW), Some("Trama".to_string()));
    }

    #[test]
    fn test_first_number_tries_every_alias() {
        let rec = record(json!({"id": "abc", "movie_id": "77"}));
        assert_eq!(first_number(&rec, aliases::MOVIE_ID), Some(77.0));
        assert_eq!(first_movie_id(&rec, aliases::MOVIE_ID), Some(77));

        let rec = record(json!({"movie_id": "abc", "id": 42}));
        assert_eq!(first_movie_id(&rec, aliases::RECOMMENDED_ID), Some(42));
    }

    #[test]
    fn test_resolve_poster() {
        let absolute = record(json!({"poster_url": "https://cdn.test/a.jpg"}));
        assert_eq!(resolve_poster(&absolute), "https://cdn.test/a.jpg");

        let rooted = record(json!({"poster_path": "/abc.jpg"}));
        assert_eq!(resolve_poster(&rooted), "/abc.jpg");

        let bare = record(json!({"image": "img/abc.jpg"}));
        assert_eq!(resolve_poster(&bare), "/img/abc.jpg");

        let missing = record(json!({"poster": ""}));
        assert_eq!(resolve_poster(&missing), DEFAULT_POSTER);
    }
}
