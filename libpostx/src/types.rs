use serde::{Deserialize, Serialize};

/// A single post to publish.
///
/// The text is sent as-is; length limits are the platform's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub text: String,
}

impl PostRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// What the platform stored: its identifier and the echoed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResult {
    pub id: String,
    pub text: String,
}
