//! # Transport
//!
//! Thin JSON-over-HTTP wrapper shared by every endpoint operation.
//!
//! One request in, one decoded payload or one [`TransportError`] out. The
//! wrapper resolves the path against the configured base URL, sends
//! `Content-Type: application/json` plus any caller headers, attaches
//! `Authorization: Bearer <token>` when the session holds an access token and
//! cancels the request once its timeout elapses.
//!
//! Every failure (connection error, timeout, non-2xx status, undecodable body)
//! is the same flat [`TransportError`]. There is no retry and the wrapper never
//! touches stored tokens.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::session::Session;

/// Request timeout used when neither the caller nor the configuration sets one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

/// Uniform transport failure.
///
/// `status` is set when the backend answered with a non-2xx status (or a body
/// that could not be decoded); it is `None` for connection failures and
/// timeouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        let status = err.status().map(|s| s.as_u16());
        if err.is_timeout() {
            Self::new(status, format!("Request timed out after {} ms", timeout.as_millis()))
        } else if err.is_decode() {
            Self::new(status, format!("Failed to read response: {}", err))
        } else {
            Self::new(status, format!("Network error: {}", err))
        }
    }
}

/// Method, body, headers and timeout of one request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Vec<u8>>,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, TransportError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| TransportError::new(None, format!("Failed to encode request: {}", e)))?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Shared HTTP transport.
///
/// Cloning is cheap: the reqwest client and the session are both reference
/// counted.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    base_url: String,
    default_timeout: Duration,
    session: Session,
}

impl Transport {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let http = Client::builder()
            .user_agent(concat!("lms-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_timeout: DEFAULT_TIMEOUT,
            session,
        }
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for an API path such as `/courses/c1/overview`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the bearer token attached when one is stored.
    ///
    /// Used directly by callers that cannot go through [`Transport::request`],
    /// such as multipart uploads.
    pub(crate) fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.access_token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Perform one request and decode the JSON response into `T`.
    ///
    /// A `204 No Content` response decodes as JSON `null`, so `()`,
    /// `Option<_>` and [`serde::de::IgnoredAny`] all succeed on it.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, TransportError> {
        let RequestOptions {
            method,
            body,
            headers,
            timeout,
        } = options;
        let timeout = timeout.unwrap_or(self.default_timeout);
        let url = self.url(path);
        let start = Instant::now();

        let mut builder = self
            .authorized(method.clone(), path)
            .header(CONTENT_TYPE, "application/json")
            .headers(headers)
            .timeout(timeout);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::debug!(
                method = %method,
                url = %url,
                duration_ms = start.elapsed().as_millis(),
                error = %e,
                "Request failed"
            );
            TransportError::from_reqwest(e, timeout)
        })?;

        let status = response.status();
        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Response received"
        );

        if !status.is_success() {
            return Err(TransportError::new(
                Some(status.as_u16()),
                format!("HTTP {}", status.as_u16()),
            ));
        }

        if status == StatusCode::NO_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|e| {
                TransportError::new(Some(status.as_u16()), format!("Empty response: {}", e))
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            TransportError::new(
                Some(status.as_u16()),
                format!("Failed to parse response: {}", e),
            )
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    pub async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(path, RequestOptions::new(method).json(body)?).await
    }
}
