use async_trait::async_trait;

use crate::profile::domain::{ProfileResponse, ProfileValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Profile source error: {0}")]
    SourceError(String),

    #[error("Stored profile is invalid: {0}")]
    InvalidPayload(#[from] ProfileValidationError),
}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileResponse, FetchProfileError>;
}
