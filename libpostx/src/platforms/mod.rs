//! Platform abstraction and implementations
//!
//! A [`Platform`] knows how to turn one [`PostRequest`] into one remote
//! create-post call. The X client is the production implementation; the
//! mock stands in for it in tests.
//!
//! # Examples
//!
//! ```no_run
//! use libpostx::platforms::{Platform, x::XClient};
//! use libpostx::{Credentials, PostRequest};
//!
//! # async fn example() -> libpostx::error::Result<()> {
//! let client = XClient::new("https://api.x.com", Credentials::from_env()?)?;
//! let result = client.post(&PostRequest::new("Hello, World!")).await?;
//! println!("Posted: {}", result.id);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PostRequest, PostResult};

pub mod x;

// Mock platform is available for all builds (not just tests) to support integration tests
pub mod mock;

/// Platform trait for publishing to a social network
#[async_trait]
pub trait Platform: Send + Sync {
    /// Publish one post
    ///
    /// Performs exactly one remote create-post call. Implementations must
    /// not retry.
    ///
    /// # Errors
    ///
    /// Returns a `PlatformError` describing the remote or network failure.
    async fn post(&self, request: &PostRequest) -> Result<PostResult>;

    /// Lowercase identifier for the platform (e.g., "x")
    fn name(&self) -> &str;
}
