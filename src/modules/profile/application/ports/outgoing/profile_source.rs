// profile_source.rs
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileSourceError {
    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Profile could not be read: {0}")]
    Unreadable(String),

    #[error("Profile is not valid JSON: {0}")]
    Malformed(String),
}

/// Producer side of the profile payload.
///
/// Implementations return the raw JSON document; schema checks happen in the
/// application layer so every source is validated the same way.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn load(&self) -> Result<Value, ProfileSourceError>;
}
