use async_trait::async_trait;

use crate::profile::domain::ProfileResponse;

use super::fetch_profile::FetchProfileError;

// Same failure modes as a full fetch; the public view itself cannot fail.
pub type GetPublicProfileError = FetchProfileError;

#[async_trait]
pub trait GetPublicProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileResponse, GetPublicProfileError>;
}
