//! postx - publish a single post to X from the command line
//!
//! This library provides the pieces behind the `post-on-x` tool: credential
//! loading, OAuth 1.0a request signing, the X API client and the
//! [`Publisher`] that ties them together.

pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod oauth;
pub mod output;
pub mod platforms;
pub mod publisher;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use credentials::Credentials;
pub use error::{PostxError, Result};
pub use publisher::Publisher;
pub use types::{PostRequest, PostResult};
