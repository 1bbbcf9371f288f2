//! Seed data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Optional JSON seed for the in-memory member directory and scripture store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    pub seed_path: Option<PathBuf>,
}

impl DataConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.seed_path {
            Some(path) if !path.is_file() => {
                Err(ValidationError::SeedFileMissing(path.display().to_string()))
            }
            _ => Ok(()),
        }
    }
}
