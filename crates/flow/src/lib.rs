//! Recommendation flow for the Movia client.
//!
//! This crate ties the pieces together: the user's selection, the remote
//! model behind [`RecommendationBackend`], and the local genre-overlap
//! recommender used whenever the remote side fails.

pub mod error;
pub mod orchestrator;
pub mod selection;

pub use error::{FlowError, NO_RECOMMENDATIONS_MESSAGE, Result};
pub use orchestrator::{
    RESULT_LIMIT, RecommendationBackend, RecommendationOrchestrator, RecommendationOutcome,
    RecommendationSource, enrich_posters,
};
pub use selection::{SELECTION_SIZE, Selection, Toggle};
