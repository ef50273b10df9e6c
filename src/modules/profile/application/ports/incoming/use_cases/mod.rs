mod fetch_profile;
mod get_public_profile;
mod validate_profile;

pub use fetch_profile::{FetchProfileError, FetchProfileUseCase};
pub use get_public_profile::{GetPublicProfileError, GetPublicProfileUseCase};
pub use validate_profile::ValidateProfileUseCase;
