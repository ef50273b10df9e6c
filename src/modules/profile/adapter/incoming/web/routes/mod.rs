mod get_profile;
mod get_public_profile;
mod validate_profile;

pub use get_profile::{__path_get_profile_handler, get_profile_handler};
pub use get_public_profile::{__path_get_public_profile_handler, get_public_profile_handler};
pub use validate_profile::{__path_validate_profile_handler, validate_profile_handler};
