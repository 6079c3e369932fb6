//! Local Recommender - network-free genre-overlap recommendations
//!
//! Used when the remote model cannot answer. Ranks every catalog movie that
//! is not part of the selection by how strongly its genres overlap with the
//! genres of the selection.
//!
//! ## Algorithm
//! 1. Build the genre profile of the selection (occurrence counts)
//! 2. Take the top 3 genres, only used to word the reason
//! 3. Score each non-selected catalog movie: sum of the counts of its genres
//! 4. Sort by score DESC, then rating DESC (stable, so catalog order breaks
//!    the remaining ties)
//! 5. Keep the top 5
//! 6. Match percent = score relative to the best score, floored at 72
//! 7. Reason = template picked by `id % 5`, filled with a genre phrase

use crate::genre_profile::GenreProfile;
use crate::reasons::{REASON_TEMPLATES, build_reason};
use catalog::{Catalog, Movie, MovieId, Recommendation};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Default number of recommendations returned
pub const DEFAULT_MAX_RESULTS: usize = 5;
/// Default number of genres considered when wording reasons
pub const DEFAULT_TOP_GENRES: usize = 3;
/// Lowest match percent a local recommendation is shown with
pub const DEFAULT_MATCH_FLOOR: u8 = 72;

/// Genre-overlap recommender over a catalog
#[derive(Debug, Clone)]
pub struct LocalRecommender<'c> {
    /// Catalog to draw candidates from (read-only, so no Mutex needed)
    catalog: &'c Catalog,

    max_results: usize,
    top_genre_count: usize,
    match_floor: u8,
    templates: &'static [&'static str],
}

/// A candidate movie with its genre-overlap score
#[derive(Debug, Clone, Copy)]
struct ScoredMovie<'c> {
    movie: &'c Movie,
    score: u32,
}

impl<'c> LocalRecommender<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            max_results: DEFAULT_MAX_RESULTS,
            top_genre_count: DEFAULT_TOP_GENRES,
            match_floor: DEFAULT_MATCH_FLOOR,
            templates: REASON_TEMPLATES,
        }
    }

    /// Configure how many recommendations to return (default: 5)
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Configure how many top genres feed the reason text (default: 3)
    pub fn with_top_genres(mut self, count: usize) -> Self {
        self.top_genre_count = count;
        self
    }

    /// Configure the minimum match percent (default: 72)
    pub fn with_match_floor(mut self, floor: u8) -> Self {
        self.match_floor = floor.min(100);
        self
    }

    /// Configure the reason templates; an empty list keeps the defaults
    pub fn with_reason_templates(mut self, templates: &'static [&'static str]) -> Self {
        if !templates.is_empty() {
            self.templates = templates;
        }
        self
    }

    /// Rank catalog movies against a selection.
    ///
    /// Never returns a selected movie. The output depends only on the
    /// selection and the catalog.
    #[instrument(skip(self, selected), fields(selected = selected.len()))]
    pub fn recommend(&self, selected: &[Movie]) -> Vec<Recommendation> {
        let profile = GenreProfile::from_movies(selected);
        let top_genres = profile.top_genres(self.top_genre_count);
        debug!("Top genres for selection: {:?}", top_genres);

        let candidates = self.rank_candidates(selected, &profile);

        let max_score = candidates
            .first()
            .map(|candidate| candidate.score)
            .filter(|&score| score > 0)
            .unwrap_or(1);

        let recommendations: Vec<Recommendation> = candidates
            .into_iter()
            .map(|candidate| Recommendation {
                movie: candidate.movie.clone(),
                reason: build_reason(self.templates, candidate.movie, &top_genres),
                match_percent: self.match_percent(candidate.score, max_score),
            })
            .collect();

        debug!("Generated {} local recommendations", recommendations.len());
        recommendations
    }

    /// Score and sort every non-selected movie, keeping the best ones
    fn rank_candidates(&self, selected: &[Movie], profile: &GenreProfile) -> Vec<ScoredMovie<'c>> {
        let selected_ids: HashSet<MovieId> = selected.iter().map(|movie| movie.id).collect();

        // collect keeps catalog order, which the stable sort relies on
        let mut candidates: Vec<ScoredMovie<'c>> = self
            .catalog
            .movies()
            .par_iter()
            .filter(|movie| !selected_ids.contains(&movie.id))
            .map(|movie| ScoredMovie {
                movie,
                score: profile.score(movie),
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                b.movie
                    .rating
                    .partial_cmp(&a.movie.rating)
                    .unwrap_or(Ordering::Equal)
            })
        });
        candidates.truncate(self.max_results);
        candidates
    }

    fn match_percent(&self, score: u32, max_score: u32) -> u8 {
        let relative = (score as f64 / max_score as f64 * 100.0).round().min(100.0) as u8;
        relative.max(self.match_floor)
    }
}

/// Local recommendations with the default settings
pub fn local_recommendations(selected: &[Movie], catalog: &Catalog) -> Vec<Recommendation> {
    LocalRecommender::new(catalog).recommend(selected)
}
