//! Mock platform implementation for testing
//!
//! Records every post it receives and answers with a configured success or
//! failure, so publishing logic can be exercised without credentials or
//! network access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{PlatformError, Result};
use crate::platforms::Platform;
use crate::types::{PostRequest, PostResult};

/// Configuration for mock platform behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Error to return instead of posting; `None` means success
    pub post_error: Option<PlatformError>,

    /// Identifier assigned to successful posts
    pub post_id: String,

    /// Delay before completing (simulates network latency)
    pub delay: Duration,

    /// Texts of every post attempted, in order
    pub posted_content: Arc<Mutex<Vec<String>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            post_error: None,
            post_id: "mock-post-id".to_string(),
            delay: Duration::from_millis(0),
            posted_content: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock platform for testing
pub struct MockPlatform {
    config: MockConfig,
}

impl MockPlatform {
    /// Create a new mock platform with the given configuration
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Create a mock platform that always succeeds with the given id
    pub fn success(post_id: &str) -> Self {
        Self::new(MockConfig {
            post_id: post_id.to_string(),
            ..Default::default()
        })
    }

    /// Create a mock platform that always fails with the given error
    pub fn failure(error: PlatformError) -> Self {
        Self::new(MockConfig {
            post_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock platform with a delay
    pub fn with_delay(post_id: &str, delay: Duration) -> Self {
        Self::new(MockConfig {
            post_id: post_id.to_string(),
            delay,
            ..Default::default()
        })
    }

    /// Number of times post has been called
    pub fn post_call_count(&self) -> usize {
        self.posted_content().len()
    }

    /// Texts of every post attempted so far
    pub fn posted_content(&self) -> Vec<String> {
        self.config
            .posted_content
            .lock()
            .map(|posts| posts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn post(&self, request: &PostRequest) -> Result<PostResult> {
        if let Ok(mut posts) = self.config.posted_content.lock() {
            posts.push(request.text.clone());
        }

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        match &self.config.post_error {
            Some(error) => Err(error.clone().into()),
            None => Ok(PostResult {
                id: self.config.post_id.clone(),
                text: request.text.clone(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
