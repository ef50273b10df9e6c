mod fetch_profile_service;
mod get_public_profile_service;
mod validate_profile_service;

pub use fetch_profile_service::FetchProfileService;
pub use get_public_profile_service::GetPublicProfileService;
pub use validate_profile_service::ValidateProfileService;
