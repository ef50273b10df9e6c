use async_trait::async_trait;
use tracing::warn;

use crate::modules::profile::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{ProfileSource, ProfileSourceError};
use crate::modules::profile::domain::{validate_profile, ProfileResponse};

pub struct FetchProfileService<S>
where
    S: ProfileSource,
{
    source: S,
}

impl<S> FetchProfileService<S>
where
    S: ProfileSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> FetchProfileUseCase for FetchProfileService<S>
where
    S: ProfileSource + Send + Sync,
{
    async fn execute(&self) -> Result<ProfileResponse, FetchProfileError> {
        let payload = self.source.load().await.map_err(|e| match e {
            ProfileSourceError::NotFound(_) => FetchProfileError::NotFound,
            ProfileSourceError::Unreadable(msg) => FetchProfileError::SourceError(msg),
            ProfileSourceError::Malformed(msg) => FetchProfileError::SourceError(msg),
        })?;

        validate_profile(&payload).map_err(|e| {
            warn!("Stored profile failed schema validation at `{}`: {}", e.path(), e);
            FetchProfileError::InvalidPayload(e)
        })
    }
}
