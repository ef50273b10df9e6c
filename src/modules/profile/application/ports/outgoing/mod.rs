pub mod profile_source;
pub use profile_source::{ProfileSource, ProfileSourceError};
