pub mod app_state_builder;
pub mod profile_fixtures;
pub mod stubs;
