//! HTTP client for the movie recommendation backend.
//!
//! This crate provides a Rust client for the backend's JSON API. It handles:
//! - Base URL configuration from the environment (`config`)
//! - Single-attempt requests with timeout and cancellation (`client`)
//! - Typed endpoints that return normalized catalog types (`endpoints`)
//!
//! ## Example Usage
//! ```ignore
//! use api_client::{ApiClient, ApiConfig, PageQuery};
//!
//! let client = ApiClient::from_config(&ApiConfig::from_env()?)?;
//! let page = client.get_movies(PageQuery::default()).await?;
//! let recs = client.get_recommendations(&[27205, 603], page.items.as_slice()).await?;
//! ```

pub mod cancel;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use client::{ApiClient, Payload, RequestBody, RequestOptions};
pub use config::{ApiConfig, normalize_backend_base_url};
pub use endpoints::{HealthResponse, ModelInfoResponse, PageQuery, RecommendRequest};
pub use error::{ApiError, Result};

// Request building types used by callers
pub use reqwest::{Method, header};
