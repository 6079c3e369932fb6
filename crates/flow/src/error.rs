use thiserror::Error;

/// Shown when neither the backend nor the local recommender produced anything
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No se pudieron generar recomendaciones.";

/// Errors surfaced by the recommendation flow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("select exactly {required} movies ({selected} selected)")]
    IncompleteSelection { selected: usize, required: usize },

    /// Carries the remote failure message when there was one
    #[error("{reason}")]
    NoRecommendations { reason: String },
}

impl FlowError {
    pub(crate) fn no_recommendations(remote_failure: &str) -> Self {
        let reason = if remote_failure.trim().is_empty() {
            NO_RECOMMENDATIONS_MESSAGE.to_string()
        } else {
            remote_failure.to_string()
        };
        FlowError::NoRecommendations { reason }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
