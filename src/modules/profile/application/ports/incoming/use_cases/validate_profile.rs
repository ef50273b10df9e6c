use serde_json::Value;

use crate::profile::domain::{ProfileResponse, ProfileValidationError};

/// Checks a candidate payload sent by an external producer.
pub trait ValidateProfileUseCase: Send + Sync {
    fn execute(&self, payload: &Value) -> Result<ProfileResponse, ProfileValidationError>;
}
