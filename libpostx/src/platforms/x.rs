//! X (formerly Twitter) platform implementation
//!
//! Talks to the X API v2 `POST /2/tweets` endpoint with OAuth 1.0a
//! user-context authorization.

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::{ConfigError, PlatformError, Result};
use crate::oauth::Signer;
use crate::platforms::Platform;
use crate::types::{PostRequest, PostResult};

pub const DEFAULT_API_BASE: &str = "https://api.x.com";

const CREATE_POST_PATH: &str = "/2/tweets";

#[derive(Debug, Serialize)]
struct CreatePostBody<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatePostResponse {
    data: PostResult,
}

/// X API client bound to one account's credentials
pub struct XClient {
    http: reqwest::Client,
    endpoint: Url,
    credentials: Credentials,
}

impl XClient {
    /// Create a client for the given API base URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `api_base` is not a usable URL.
    pub fn new(api_base: &str, credentials: Credentials) -> Result<Self> {
        Self::with_http_client(reqwest::Client::new(), api_base, credentials)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_http_client(
        http: reqwest::Client,
        api_base: &str,
        credentials: Credentials,
    ) -> Result<Self> {
        let endpoint = create_post_endpoint(api_base)?;
        Ok(Self {
            http,
            endpoint,
            credentials,
        })
    }

    /// The fully resolved create-post URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Platform for XClient {
    async fn post(&self, request: &PostRequest) -> Result<PostResult> {
        let authorization =
            Signer::new(&self.credentials).authorization_header(&Method::POST, &self.endpoint, &[])?;

        debug!(endpoint = %self.endpoint, "Sending create-post request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&CreatePostBody {
                text: &request.text,
            })
            .send()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlatformError::Network(e.to_string()))?;

        debug!(status = status.as_u16(), "Received create-post response");

        if !status.is_success() {
            return Err(map_status_error(status, body).into());
        }

        let parsed: CreatePostResponse = serde_json::from_str(&body).map_err(|e| {
            PlatformError::Posting(format!("Unexpected response ({}): {}", e, body))
        })?;

        Ok(parsed.data)
    }

    fn name(&self) -> &str {
        "x"
    }
}

fn create_post_endpoint(api_base: &str) -> Result<Url> {
    let base = Url::parse(api_base.trim_end_matches('/'))
        .map_err(|e| ConfigError::InvalidValue(format!("api_base '{}': {}", api_base, e)))?;

    if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
        return Err(ConfigError::InvalidValue(format!(
            "api_base '{}' must be an http(s) URL",
            api_base
        ))
        .into());
    }

    let path = format!("{}{}", base.path().trim_end_matches('/'), CREATE_POST_PATH);
    let mut endpoint = base;
    endpoint.set_path(&path);
    Ok(endpoint)
}

/// Map a non-2xx response to a `PlatformError`
///
/// - 401 → `Authentication`
/// - 403 mentioning duplicate content → `Duplicate`, other 403 → `Authentication`
/// - 429 → `RateLimit`
/// - 5xx → `Network`
/// - anything else → `Posting`
///
/// The response body is kept verbatim.
fn map_status_error(status: StatusCode, body: String) -> PlatformError {
    let detail = format!("HTTP {}: {}", status.as_u16(), body);

    match status {
        StatusCode::UNAUTHORIZED => PlatformError::Authentication(detail),
        StatusCode::FORBIDDEN if body.to_lowercase().contains("duplicate") => {
            PlatformError::Duplicate(detail)
        }
        StatusCode::FORBIDDEN => PlatformError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => PlatformError::RateLimit(detail),
        s if s.is_server_error() => PlatformError::Network(detail),
        _ => PlatformError::Posting(detail),
    }
}
