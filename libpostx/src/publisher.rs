//! The Publisher: one authenticated create-post call, one outcome
//!
//! Publishing is fire-and-forget. There is no retry, no backoff and no
//! deduplication; calling [`Publisher::publish`] twice with the same text
//! issues two remote calls.

use tracing::info;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::platforms::x::XClient;
use crate::platforms::Platform;
use crate::types::{PostRequest, PostResult};

pub struct Publisher<P: Platform> {
    platform: P,
}

impl Publisher<XClient> {
    /// Build a publisher that posts to X with the given credentials
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the configured API base URL is invalid.
    pub fn for_x(config: &Config, credentials: Credentials) -> Result<Self> {
        let client = XClient::new(&config.x.api_base, credentials)?;
        Ok(Self::new(client))
    }
}

impl<P: Platform> Publisher<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Publish one post
    ///
    /// Yields either the stored post (identifier and echoed text) or the
    /// error from the platform, never both.
    pub async fn publish(&self, request: &PostRequest) -> Result<PostResult> {
        info!(
            platform = self.platform.name(),
            chars = request.text.chars().count(),
            "Publishing post"
        );

        match self.platform.post(request).await {
            Ok(result) => {
                info!(platform = self.platform.name(), id = %result.id, "Post created");
                Ok(result)
            }
            Err(e) => {
                // Reported by the caller; kept below the default level.
                info!(platform = self.platform.name(), error = %e, "Post failed");
                Err(e)
            }
        }
    }
}
