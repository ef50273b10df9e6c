pub mod entities;
pub mod validation;
mod visibility;

pub use entities::ProfileResponse;
pub use validation::{validate_profile, ProfileValidationError};
