use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::{
    FetchProfileUseCase, GetPublicProfileError, GetPublicProfileUseCase,
};
use crate::modules::profile::domain::ProfileResponse;

pub struct GetPublicProfileService {
    fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
}

impl GetPublicProfileService {
    pub fn new(fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>) -> Self {
        Self { fetch_profile }
    }
}

#[async_trait]
impl GetPublicProfileUseCase for GetPublicProfileService {
    async fn execute(&self) -> Result<ProfileResponse, GetPublicProfileError> {
        let profile = self.fetch_profile.execute().await?;
        Ok(profile.public_view())
    }
}
