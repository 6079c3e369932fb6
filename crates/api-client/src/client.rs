//! Single-attempt HTTP transport to the recommendation backend.
//!
//! Every request races three futures:
//! 1. the HTTP exchange itself
//! 2. a timeout (12 s unless configured otherwise)
//! 3. an optional external cancel signal
//!
//! Whichever finishes first wins. The losing request future is dropped,
//! which aborts the connection.

use crate::cancel::CancelSignal;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Base used only to resolve relative (same-origin) URLs
const RELATIVE_BASE: &str = "http://relative.invalid";

// ============================================================================
// Request / response types
// ============================================================================

/// Body of a request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent unchanged
    Text(String),
    /// Serialized to JSON
    Json(Value),
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `application/json` response; JSON null if the body did not parse
    Json(Value),
    Text(String),
}

impl Payload {
    /// JSON view of the payload, text becomes a JSON string
    pub fn into_json(self) -> Value {
        match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }
}

/// Per-request options
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Query pairs; null and empty string values are skipped
    pub query: Vec<(String, Value)>,
    pub body: Option<RequestBody>,
    pub headers: HeaderMap,
    /// Overrides the client timeout
    pub timeout: Option<Duration>,
    pub cancel: Option<CancelSignal>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
            timeout: None,
            cancel: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(body.into()));
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelSignal) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the recommendation backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    /// `None` means same-origin mode
    base_url: Option<String>,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client for an already normalized base URL
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            timeout: Duration::from_millis(crate::config::DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self::new(config.base_url()?).with_timeout(config.timeout()))
    }

    /// Configure the default timeout for every request (default: 12 s)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve `path` and `query` into the URL that would be requested
    pub fn build_url(&self, path: &str, query: &[(String, Value)]) -> Result<String> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        // A repeated key replaces the earlier value in its original position
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(query.len());
        for (key, value) in query {
            let Some(value) = query_value(value) else {
                continue;
            };
            match pairs.iter_mut().find(|(existing, _)| *existing == key.as_str()) {
                Some(pair) => pair.1 = value,
                None => pairs.push((key.as_str(), value)),
            }
        }

        match &self.base_url {
            Some(base) => {
                let mut url = Url::parse(&format!("{base}{path}"))
                    .map_err(|e| ApiError::Config(format!("invalid backend URL {base}: {e}")))?;
                if !pairs.is_empty() {
                    url.query_pairs_mut().extend_pairs(&pairs);
                }
                Ok(url.to_string())
            }
            None => {
                let mut url = Url::parse(RELATIVE_BASE)
                    .and_then(|base| base.join(&path))
                    .map_err(|e| ApiError::Config(format!("invalid request path {path}: {e}")))?;
                if !pairs.is_empty() {
                    url.query_pairs_mut().extend_pairs(&pairs);
                }
                Ok(match url.query() {
                    Some(query) => format!("{}?{}", url.path(), query),
                    None => url.path().to_string(),
                })
            }
        }
    }

    /// Perform one request.
    ///
    /// Resolves to the decoded body for 2xx responses. Non-2xx responses
    /// become [`ApiError::Http`]; timeout and cancellation both become
    /// [`ApiError::Timeout`].
    #[instrument(skip(self, options), fields(method = %options.method))]
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Payload> {
        let url = self.build_url(path, &options.query)?;
        let timeout = options.timeout.unwrap_or(self.timeout);
        let cancel = options.cancel.clone();
        debug!("{} {}", options.method, url);

        let cancelled = async {
            match &cancel {
                Some(signal) => signal.cancelled().await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            result = self.send(url, options) => result,
            _ = tokio::time::sleep(timeout) => {
                warn!("Request to {} timed out after {:?}", path, timeout);
                Err(ApiError::Timeout)
            }
            _ = cancelled => {
                debug!("Request to {} cancelled", path);
                Err(ApiError::Timeout)
            }
        }
    }

    async fn send(&self, url: String, options: RequestOptions) -> Result<Payload> {
        if self.base_url.is_none() {
            error!("No backend base URL configured, cannot send {}", url);
            return Err(ApiError::Network(format!(
                "relative URL {url} cannot be sent without a backend base URL"
            )));
        }

        let RequestOptions {
            method,
            body,
            mut headers,
            ..
        } = options;

        let mut builder = self.http.request(method, &url);
        if let Some(body) = body {
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            builder = match body {
                RequestBody::Text(text) => builder.body(text),
                RequestBody::Json(value) => builder.body(value.to_string()),
            };
        }

        let response = builder.headers(headers).send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.contains("application/json"));

        let payload = if is_json {
            let bytes = response.bytes().await?;
            Payload::Json(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
        } else {
            Payload::Text(response.text().await?)
        };

        if !status.is_success() {
            let status = status.as_u16();
            let message = error_message(status, &payload);
            debug!("Backend answered {}: {}", status, message);
            return Err(ApiError::Http {
                status,
                message,
                payload: payload.into_json(),
            });
        }

        Ok(payload)
    }
}

/// Query string form of a JSON scalar; `None` means skip the pair
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Message of a failed response: `message`, then `detail`, then a default
fn error_message(status: u16, payload: &Payload) -> String {
    payload
        .as_json()
        .and_then(Value::as_object)
        .and_then(|body| {
            ["message", "detail"]
                .iter()
                .filter_map(|key| body.get(*key).and_then(Value::as_str))
                .find(|text| !text.is_empty())
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error {status}"))
}
