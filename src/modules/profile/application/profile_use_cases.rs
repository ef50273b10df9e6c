use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    FetchProfileUseCase, GetPublicProfileUseCase, ValidateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub fetch: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub get_public: Arc<dyn GetPublicProfileUseCase + Send + Sync>,
    pub validate: Arc<dyn ValidateProfileUseCase + Send + Sync>,
}
