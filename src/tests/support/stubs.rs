use async_trait::async_trait;

use crate::profile::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase, GetPublicProfileError, GetPublicProfileUseCase,
};
use crate::profile::domain::ProfileResponse;

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self) -> Result<ProfileResponse, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPublicProfileUseCase;

#[async_trait]
impl GetPublicProfileUseCase for StubGetPublicProfileUseCase {
    async fn execute(&self) -> Result<ProfileResponse, GetPublicProfileError> {
        unimplemented!("Not used in this test")
    }
}
