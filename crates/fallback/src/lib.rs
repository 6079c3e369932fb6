//! # Fallback Crate
//!
//! Network-free recommendations, used when the remote model cannot answer.
//!
//! ## Components
//!
//! ### Genre Profile
//! Occurrence counts of the selection's genres:
//! - Candidates score the sum of the counts of their genres
//! - The top genres word the reason sentence
//!
//! ### Local Recommender
//! Ranks every catalog movie outside the selection:
//! - Score DESC, then rating DESC, then catalog order
//! - Top 5, match percent floored at 72
//! - One of five reason templates, chosen by movie id
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::builtin;
//! use fallback::{LocalRecommender, local_recommendations};
//!
//! let recs = local_recommendations(&selected, builtin());
//!
//! let top_three = LocalRecommender::new(builtin())
//!     .with_max_results(3)
//!     .recommend(&selected);
//! ```
//!
//! ## Guarantees
//!
//! - Deterministic: same selection and catalog, same output
//! - Selected movies are never recommended
//! - At most `min(5, catalog size - selected in catalog)` results

pub mod genre_profile;
pub mod reasons;
pub mod local;

pub use genre_profile::GenreProfile;
pub use local::{
    DEFAULT_MATCH_FLOOR, DEFAULT_MAX_RESULTS, DEFAULT_TOP_GENRES, LocalRecommender,
    local_recommendations,
};
pub use reasons::{REASON_TEMPLATES, build_reason, genre_phrase};
