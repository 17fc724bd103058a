//! Configuration structures and utilities

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::querying::star_join::JoinStrategy;

/// Which storage backend to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Unindexed list of facts, linear scans
    GiantTable,
    /// Six permutation indexes with selectivity statistics
    #[default]
    HexaStore,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
    pub join_strategy: JoinStrategy,
}

impl StorageConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }
}
