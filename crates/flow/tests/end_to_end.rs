//! End-to-end flow: selection -> HTTP backend -> normalized results.

use std::sync::Arc;
use std::time::Duration;

use api_client::ApiClient;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use catalog::builtin;
use flow::{RecommendationOrchestrator, RecommendationSource, Selection};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const SELECTED: [u64; 5] = [27205, 603, 496243, 550, 335984];

async fn start_mock_backend(router: Router) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to get local address");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock backend failed");
    });

    (format!("http://{addr}"), handle)
}

fn orchestrator_for(base_url: Option<String>) -> RecommendationOrchestrator {
    let client = ApiClient::new(base_url).with_timeout(Duration::from_millis(500));
    RecommendationOrchestrator::new(Arc::new(client), Arc::new(builtin().clone()))
}

async fn model_answer(Json(body): Json<Value>) -> Json<Value> {
    assert_eq!(body, json!({"movie_ids": SELECTED}));

    Json(json!({
        "recommendations": [
            {"movie_id": 438631, "probability": 0.91},
            {"movie_id": 1124, "probability": 0.84},
            {"movie_id": 238, "probability": 0.77},
        ],
        "seed_movies": SELECTED,
    }))
}

#[tokio::test]
async fn test_remote_recommendations_end_to_end() {
    let router = Router::new().route("/recommend", post(model_answer));
    let (base_url, handle) = start_mock_backend(router).await;
    let orchestrator = orchestrator_for(Some(base_url));

    let outcome = orchestrator
        .recommend(&Selection::from_ids(builtin(), &SELECTED))
        .await
        .unwrap();

    assert_eq!(outcome.source, RecommendationSource::Remote);
    assert_eq!(outcome.recommendations.len(), 3);
    assert_eq!(outcome.recommendations[0].movie.title, "Dune");
    assert!(
        outcome
            .recommendations
            .windows(2)
            .all(|w| w[0].match_percent > w[1].match_percent)
    );
    // posters come from the catalog since the backend sent none
    assert_eq!(
        outcome.recommendations[0].movie.poster,
        builtin().get(438631).unwrap().poster
    );

    handle.abort();
}

#[tokio::test]
async fn test_backend_error_falls_back_to_local() {
    let router = Router::new().route(
        "/recommend",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"detail": "Model not loaded"})),
            )
        }),
    );
    let (base_url, handle) = start_mock_backend(router).await;
    let orchestrator = orchestrator_for(Some(base_url));

    let outcome = orchestrator
        .recommend(&Selection::from_ids(builtin(), &SELECTED))
        .await
        .unwrap();

    assert_eq!(outcome.source, RecommendationSource::LocalFallback);
    assert_eq!(outcome.recommendations[0].movie.title, "Logan");
    assert_eq!(outcome.recommendations[0].match_percent, 100);
    assert_eq!(outcome.recommendations.len(), 3);

    handle.abort();
}

#[tokio::test]
async fn test_same_origin_mode_falls_back_to_local() {
    let orchestrator = orchestrator_for(None);

    let outcome = orchestrator
        .recommend(&Selection::from_ids(builtin(), &SELECTED))
        .await
        .unwrap();

    assert_eq!(outcome.source, RecommendationSource::LocalFallback);
    assert!(
        outcome
            .recommendations
            .iter()
            .all(|r| !SELECTED.contains(&r.movie.id))
    );
}
