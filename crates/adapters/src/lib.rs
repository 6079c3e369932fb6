//! Normalization of untrusted backend payloads.
//!
//! This crate provides:
//! - Field aliases and scalar coercion (`fields`)
//! - Movie normalization (`normalize_movie`)
//! - Envelope detection for item lists (`get_collection`, `PayloadShape`)
//! - Page normalization (`normalize_movies_page`)
//! - Recommendation normalization (`normalize_recommendations`)
//!
//! ## Architecture
//! Payloads are processed in stages:
//! 1. The collection extractor finds the item list inside the envelope
//! 2. Each item goes through the field normalizer
//! 3. Page or recommendation metadata is read around the items
//!
//! None of these functions fail. Unknown shapes degrade to empty lists,
//! `None` or default values, because the backend format is not under our
//! control.
//!
//! ## Example Usage
//! ```ignore
//! use adapters::{normalize_movies_page, normalize_recommendations};
//!
//! let page = normalize_movies_page(&payload);
//! let recs = normalize_recommendations(&payload, catalog.movies());
//! ```

pub mod fields;
pub mod movie;
pub mod collection;
pub mod page;
pub mod recommendations;

// Re-export main functions
pub use collection::{PayloadShape, get_collection};
pub use movie::normalize_movie;
pub use page::normalize_movies_page;
pub use recommendations::{DEFAULT_REASON, normalize_recommendations};
