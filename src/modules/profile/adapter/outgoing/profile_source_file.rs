use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::profile::application::ports::outgoing::{ProfileSource, ProfileSourceError};

/// Reads the profile payload from a JSON file on every load, so edits to the
/// file show up without a restart.
#[derive(Debug, Clone)]
pub struct ProfileSourceFile {
    path: PathBuf,
}

impl ProfileSourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileSource for ProfileSourceFile {
    async fn load(&self) -> Result<Value, ProfileSourceError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            let location = self.path.display().to_string();
            match e.kind() {
                ErrorKind::NotFound => ProfileSourceError::NotFound(location),
                _ => ProfileSourceError::Unreadable(format!("{location}: {e}")),
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| ProfileSourceError::Malformed(e.to_string()))
    }
}
