use serde_json::Value;
use tracing::debug;

use crate::modules::profile::application::ports::incoming::use_cases::ValidateProfileUseCase;
use crate::modules::profile::domain::{validate_profile, ProfileResponse, ProfileValidationError};

#[derive(Debug, Clone, Default)]
pub struct ValidateProfileService;

impl ValidateProfileService {
    pub fn new() -> Self {
        Self
    }
}

impl ValidateProfileUseCase for ValidateProfileService {
    fn execute(&self, payload: &Value) -> Result<ProfileResponse, ProfileValidationError> {
        validate_profile(payload).inspect_err(|e| {
            debug!("Candidate profile rejected at `{}`: {}", e.path(), e);
        })
    }
}
