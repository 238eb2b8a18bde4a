//! # Request Context
//!
//! An explicit request-context object carried into every remote call.
//!
//! There is no module-level client singleton and no interceptor: a context
//! holds the base URL, the shared HTTP client, and (optionally) the current
//! bearer token. Code that acts on behalf of a logged-in owner derives a
//! token-carrying context with [`RequestContext::with_token`]; everything
//! else stays anonymous. A 401 comes back as [`ApiError::Unauthorized`] and
//! the caller applies its own policy.

use reqwest::{RequestBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Context for requests against one backend.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct RequestContext {
    base_url: String,
    bearer: Option<String>,
    client: reqwest::Client,
}

impl RequestContext {
    /// Creates an anonymous context for the configured backend.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(RequestContext {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer: None,
            client,
        })
    }

    /// Creates a context for an arbitrary base URL (NTS API, tests).
    pub fn for_base_url(base_url: &str, config: &ApiConfig) -> ApiResult<Self> {
        let mut ctx = RequestContext::new(config)?;
        ctx.base_url = base_url.trim_end_matches('/').to_string();
        Ok(ctx)
    }

    /// Returns a context carrying the given bearer token.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        RequestContext {
            base_url: self.base_url.clone(),
            bearer: Some(token.into()),
            client: self.client.clone(),
        }
    }

    /// Returns the current token, if any.
    pub fn token(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    /// Builds the absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a GET request.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    /// Starts a POST request.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    /// Starts a PUT request.
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.put(self.url(path)))
    }

    /// Starts a DELETE request.
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.delete(self.url(path)))
    }

    /// Attaches the bearer token, when the context carries one.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Maps a response status to the gateway error taxonomy.
///
/// 401 becomes [`ApiError::Unauthorized`]; any other non-success status
/// becomes [`ApiError::Status`].
pub fn ensure_success(response: Response) -> ApiResult<Response> {
    match response.status() {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        status if !status.is_success() => Err(ApiError::Status {
            status: status.as_u16(),
        }),
        _ => Ok(response),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
