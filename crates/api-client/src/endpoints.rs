//! Typed backend endpoints.
//!
//! Each endpoint sends one request and runs the raw payload through the
//! normalizers, so callers only ever see canonical types.

use crate::client::{ApiClient, RequestOptions};
use crate::error::Result;
use adapters::{normalize_movies_page, normalize_recommendations};
use catalog::{Movie, MovieId, MoviesPage, Recommendation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, info};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 60;

/// Paging parameters for listing and search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Body of `POST /recommend`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendRequest {
    pub movie_ids: Vec<MovieId>,
}

/// `GET /health`
///
/// Informational payload, passed through as received. Known fields are
/// lifted out of an object payload; `raw` keeps the body untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct HealthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any other fields the backend reports
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    pub raw: Value,
}

impl HealthResponse {
    pub fn from_payload(raw: Value) -> Self {
        let mut extra = raw.as_object().cloned().unwrap_or_default();
        Self {
            status: take_string(&mut extra, "status"),
            message: take_string(&mut extra, "message"),
            extra,
            raw,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("ok")
    }
}

/// `GET /model/info`
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ModelInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    pub raw: Value,
}

impl ModelInfoResponse {
    pub fn from_payload(raw: Value) -> Self {
        let mut extra = raw.as_object().cloned().unwrap_or_default();
        let metrics = match extra.get("metrics") {
            Some(Value::Object(metrics)) => {
                let metrics = metrics.clone();
                extra.remove("metrics");
                Some(metrics)
            }
            _ => None,
        };
        Self {
            version: take_string(&mut extra, "version"),
            trained_at: take_string(&mut extra, "trained_at"),
            metrics,
            extra,
            raw,
        }
    }
}

/// Move a string field out of `fields`; other value types stay behind
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    let value = fields.get(key)?.as_str()?.to_string();
    fields.remove(key);
    Some(value)
}

impl ApiClient {
    /// `GET /movies`
    pub async fn get_movies(&self, query: PageQuery) -> Result<MoviesPage> {
        let options = RequestOptions::get()
            .with_query("page", query.page)
            .with_query("page_size", query.page_size);

        let raw = self.request("/movies", options).await?.into_json();
        let page = normalize_movies_page(&raw);
        debug!("Fetched page {} with {} movies", page.page, page.items.len());
        Ok(page)
    }

    /// `GET /movies/search`
    pub async fn search_movies(&self, text: &str, query: PageQuery) -> Result<Vec<Movie>> {
        let options = RequestOptions::get()
            .with_query("q", text)
            .with_query("page", query.page)
            .with_query("page_size", query.page_size);

        let raw = self.request("/movies/search", options).await?.into_json();
        Ok(normalize_movies_page(&raw).items)
    }

    /// `POST /recommend`
    ///
    /// Id-only recommendations are resolved against `known_movies`.
    pub async fn get_recommendations(
        &self,
        movie_ids: &[MovieId],
        known_movies: &[Movie],
    ) -> Result<Vec<Recommendation>> {
        let body = json!(RecommendRequest {
            movie_ids: movie_ids.to_vec(),
        });
        let options = RequestOptions::post().with_json(body);

        let raw = self.request("/recommend", options).await?.into_json();
        let recommendations = normalize_recommendations(&raw, known_movies);
        info!("Backend returned {} recommendations", recommendations.len());
        Ok(recommendations)
    }

    /// `GET /health`
    pub async fn get_health(&self) -> Result<HealthResponse> {
        let raw = self.request("/health", RequestOptions::get()).await?.into_json();
        Ok(HealthResponse::from_payload(raw))
    }

    /// `GET /model/info`
    pub async fn get_model_info(&self) -> Result<ModelInfoResponse> {
        let raw = self.request("/model/info", RequestOptions::get()).await?.into_json();
        Ok(ModelInfoResponse::from_payload(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_query() {
        let query = PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 60);
    }

    #[test]
    fn test_recommend_request_body() {
        let body = json!(RecommendRequest {
            movie_ids: vec![27205, 603],
        });
        assert_eq!(body, json!({"movie_ids": [27205, 603]}));
    }

    #[test]
    fn test_health_keeps_extra_fields() {
        let health = HealthResponse::from_payload(json!({
            "status": "ok",
            "model_loaded": true,
        }));

        assert!(health.is_ok());
        assert_eq!(health.message, None);
        assert_eq!(health.extra.get("model_loaded"), Some(&json!(true)));
        assert!(health.extra.get("status").is_none());
    }

    #[test]
    fn test_health_passes_through_any_shape() {
        let health = HealthResponse::from_payload(json!("OK"));
        assert_eq!(health.status, None);
        assert!(health.extra.is_empty());
        assert_eq!(health.raw, json!("OK"));

        let health = HealthResponse::from_payload(json!({"model_loaded": true, "catalog_size": 35}));
        assert_eq!(health.status, None);
        assert!(!health.is_ok());
        assert_eq!(health.extra.get("catalog_size"), Some(&json!(35)));
        assert_eq!(health.raw, json!({"model_loaded": true, "catalog_size": 35}));
    }

    #[test]
    fn test_health_non_string_status_stays_in_extra() {
        let health = HealthResponse::from_payload(json!({"status": 1}));
        assert_eq!(health.status, None);
        assert_eq!(health.extra.get("status"), Some(&json!(1)));
    }

    #[test]
    fn test_model_info_all_optional() {
        let info = ModelInfoResponse::from_payload(json!({}));
        assert_eq!(info.version, None);
        assert_eq!(info.metrics, None);
        assert!(info.extra.is_empty());

        let info = ModelInfoResponse::from_payload(json!({
            "version": "v1.0.0",
            "metrics": {"auc": 0.91},
            "n_features": 42,
        }));
        assert_eq!(info.version.as_deref(), Some("v1.0.0"));
        assert_eq!(info.metrics.unwrap().get("auc"), Some(&json!(0.91)));
        assert_eq!(info.extra.get("n_features"), Some(&json!(42)));
    }

    #[test]
    fn test_model_info_non_object_payload() {
        let info = ModelInfoResponse::from_payload(json!([1, 2]));
        assert_eq!(info.version, None);
        assert_eq!(info.trained_at, None);
        assert!(info.extra.is_empty());
        assert_eq!(info.raw, json!([1, 2]));
    }

    #[test]
    fn test_model_info_serializes_known_and_extra_fields() {
        let info = ModelInfoResponse::from_payload(json!({"version": "v2", "n_features": 24}));
        assert_eq!(json!(info), json!({"version": "v2", "n_features": 24}));
    }
}
