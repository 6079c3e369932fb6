//! # Recommendation Orchestrator
//!
//! This module coordinates one recommendation request:
//! 1. Check that the selection is complete
//! 2. Ask the backend model, resolving ids against the catalog
//! 3. Enrich remote results with catalog posters
//! 4. On any remote failure, rank locally instead
//! 5. Return the top 3 with their source
//!
//! An empty remote answer counts as a failure. An error is only surfaced
//! when the local recommender has nothing to offer either.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use api_client::{ApiClient, ApiError};
use catalog::{Catalog, Movie, MovieId, Recommendation};
use fallback::LocalRecommender;

use crate::error::{FlowError, Result};
use crate::selection::{SELECTION_SIZE, Selection};

/// Number of recommendations shown to the user
pub const RESULT_LIMIT: usize = 3;

/// Where the recommendations came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    Remote,
    LocalFallback,
}

/// Final answer of the flow
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationOutcome {
    pub recommendations: Vec<Recommendation>,
    pub source: RecommendationSource,
}

/// Anything that can produce model recommendations for a set of ids
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    async fn recommend(
        &self,
        movie_ids: &[MovieId],
        known_movies: &[Movie],
    ) -> std::result::Result<Vec<Recommendation>, ApiError>;
}

#[async_trait]
impl RecommendationBackend for ApiClient {
    async fn recommend(
        &self,
        movie_ids: &[MovieId],
        known_movies: &[Movie],
    ) -> std::result::Result<Vec<Recommendation>, ApiError> {
        self.get_recommendations(movie_ids, known_movies).await
    }
}

/// Coordinates the backend and the local recommender
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    backend: Arc<dyn RecommendationBackend>,
    catalog: Arc<Catalog>,
    limit: usize,
}

impl RecommendationOrchestrator {
    pub fn new(backend: Arc<dyn RecommendationBackend>, catalog: Arc<Catalog>) -> Self {
        Self {
            backend,
            catalog,
            limit: RESULT_LIMIT,
        }
    }

    /// Configure how many recommendations are returned (default: 3)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Main entry point: recommendations for a complete selection
    #[instrument(skip(self, selection), fields(selected = selection.len()))]
    pub async fn recommend(&self, selection: &Selection) -> Result<RecommendationOutcome> {
        if !selection.is_complete() {
            return Err(FlowError::IncompleteSelection {
                selected: selection.len(),
                required: SELECTION_SIZE,
            });
        }

        let movie_ids = selection.ids();
        let remote_failure = match self
            .backend
            .recommend(&movie_ids, self.catalog.movies())
            .await
        {
            Ok(recommendations) if !recommendations.is_empty() => {
                let mut recommendations = enrich_posters(recommendations, &self.catalog);
                recommendations.truncate(self.limit);
                info!("Using {} remote recommendations", recommendations.len());
                return Ok(RecommendationOutcome {
                    recommendations,
                    source: RecommendationSource::Remote,
                });
            }
            Ok(_) => "backend returned no recommendations".to_string(),
            Err(err) => err.to_string(),
        };

        warn!(
            "Backend unavailable, using local recommendations: {}",
            remote_failure
        );

        let mut recommendations = LocalRecommender::new(&self.catalog).recommend(selection.movies());
        if recommendations.is_empty() {
            return Err(FlowError::no_recommendations(&remote_failure));
        }
        recommendations.truncate(self.limit);
        info!("Using {} local recommendations", recommendations.len());

        Ok(RecommendationOutcome {
            recommendations,
            source: RecommendationSource::LocalFallback,
        })
    }
}

/// Replace missing or placeholder posters with the catalog's poster.
///
/// Applying it twice changes nothing.
pub fn enrich_posters(recommendations: Vec<Recommendation>, catalog: &Catalog) -> Vec<Recommendation> {
    recommendations
        .into_iter()
        .map(|mut rec| {
            if rec.movie.has_placeholder_poster() {
                if let Some(local) = catalog.get(rec.movie.id) {
                    rec.movie.poster = local.poster.clone();
                }
            }
            rec
        })
        .collect()
}
