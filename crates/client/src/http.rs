//! HTTP transport over the back-office REST API.
//!
//! Repositories speak to the API through the [`Transport`] trait so tests
//! can substitute a scripted transport. The real implementation wraps
//! `reqwest` with the base URL, bearer token and timeout from
//! configuration.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::warn;

use boreal_shared::{ApiConfig, AppError, AppResult};

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// Returns the method name on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A request to the back-office API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL, e.g. `/api/ambassadors`.
    pub path: String,
    /// Query string parameters.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Builds a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Builds a POST request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Builds a PUT request with a JSON body.
    #[must_use]
    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Builds a PATCH request with a JSON body.
    #[must_use]
    pub fn patch(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Patch,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Builds a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Adds a query string parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// A response from the back-office API.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body; `Null` when the body was empty.
    pub body: serde_json::Value,
}

/// Transport executing API requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes one request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Network` when no response was produced at all
    /// (DNS, connect, timeout). Non-2xx statuses are NOT errors at this
    /// layer; [`check`] turns them into `AppError::Api`.
    async fn execute(&self, request: ApiRequest) -> AppResult<ApiResponse>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpTransport {
    /// Creates a transport from the API configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url).query(&request.query);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| AppError::Deserialization(e.to_string()))?
        };

        Ok(ApiResponse { status, body })
    }
}

/// Turns a non-2xx response into an `AppError::Api`.
///
/// The message comes from the body's `error` or `message` field when the
/// server provided one.
pub fn check(response: ApiResponse) -> AppResult<serde_json::Value> {
    if (200..300).contains(&response.status) {
        return Ok(response.body);
    }
    let message = response
        .body
        .get("error")
        .or_else(|| response.body.get("message"))
        .and_then(serde_json::Value::as_str)
        .unwrap_or("request failed")
        .to_string();
    Err(AppError::Api {
        status: response.status,
        message,
    })
}

/// Decodes a JSON value into a DTO.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| AppError::Deserialization(e.to_string()))
}

/// Runs an operation, retrying exactly once on a network error.
///
/// Only `AppError::Network` triggers the retry; an API error means the
/// server already saw the request and retrying could duplicate a write.
pub async fn with_retry<T, F, Fut>(operation: F) -> AppResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    match operation().await {
        Err(AppError::Network(first)) => {
            warn!(error = %first, "network error, retrying once");
            operation().await
        }
        other => other,
    }
}
