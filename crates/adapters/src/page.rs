//! Build a `MoviesPage` from a listing or search payload.

use crate::collection::get_collection;
use crate::fields::{Record, aliases, as_number, as_record, first_present};
use crate::movie::normalize_movie;
use catalog::{Movie, MoviesPage};
use serde_json::Value;

/// Normalize a paginated payload.
///
/// Items that are not valid movies are dropped. Pagination metadata is read
/// from the usual field variants and derived from the item count when the
/// backend omits it.
pub fn normalize_movies_page(raw: &Value) -> MoviesPage {
    let items: Vec<Movie> = get_collection(raw)
        .iter()
        .filter_map(normalize_movie)
        .collect();
    let count = items.len() as u32;

    let Some(record) = as_record(raw) else {
        return MoviesPage {
            items,
            page: 1,
            page_size: count,
            total: count,
            total_pages: if count > 0 { 1 } else { 0 },
        };
    };

    let page = read_count(record, aliases::PAGE).unwrap_or(1).max(1);
    let page_size = read_count(record, aliases::PAGE_SIZE).unwrap_or(count);
    let total = read_count(record, aliases::TOTAL).unwrap_or(count);
    let total_pages = read_count(record, aliases::TOTAL_PAGES).unwrap_or_else(|| {
        if page_size > 0 {
            total.div_ceil(page_size).max(1)
        } else {
            1
        }
    });

    MoviesPage {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

/// Non-negative whole number from the first present alias
fn read_count(record: &Record, keys: &[&str]) -> Option<u32> {
    first_present(record, keys)
        .and_then(as_number)
        .map(|n| n.max(0.0).floor() as u32)
}
