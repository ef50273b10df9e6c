use crate::profile::application::ports::incoming::use_cases::{
    FetchProfileUseCase, GetPublicProfileUseCase, ValidateProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::ValidateProfileService;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    fetch_profile: Option<Arc<dyn FetchProfileUseCase + Send + Sync>>,
    get_public_profile: Option<Arc<dyn GetPublicProfileUseCase + Send + Sync>>,
    validate_profile: Option<Arc<dyn ValidateProfileUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            get_public_profile: Some(Arc::new(StubGetPublicProfileUseCase)),
            // Validation is pure, so the real service stands in by default.
            validate_profile: Some(Arc::new(ValidateProfileService::new())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_get_public_profile(
        mut self,
        uc: impl GetPublicProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_public_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_validate_profile(
        mut self,
        uc: impl ValidateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.validate_profile = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: ProfileUseCases {
                fetch: self.fetch_profile.expect("fetch_profile not set"),
                get_public: self.get_public_profile.expect("get_public_profile not set"),
                validate: self.validate_profile.expect("validate_profile not set"),
            },
        })
    }
}
