//! Table configuration module.
//!
//! This module defines the settings used to build every hash set the tool
//! creates: bucket count, growth threshold, hashing strategy and the optional
//! diagnostics file.

use super::{ConfigResult, Validate};
use crate::data_structures::chained_hash_set::{
    ChainedHashSetConfig, HashStrategy, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_LOAD_FACTOR,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Hash set configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableSettings {
    /// Number of buckets each table starts with
    pub initial_capacity: usize,

    /// Rounded prospective load factor above which a table doubles
    pub max_load_factor: f64,

    /// Bucket hashing strategy
    pub hash_strategy: HashStrategy,

    /// File receiving resize statistics (diagnostics are off when unset)
    pub diagnostics_file: Option<PathBuf>,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hash_strategy: HashStrategy::default(),
            diagnostics_file: None,
        }
    }
}

impl TableSettings {
    /// Builds the hash set configuration described by these settings.
    pub fn to_set_config(&self) -> ChainedHashSetConfig {
        let config = ChainedHashSetConfig::new()
            .with_initial_capacity(self.initial_capacity)
            .with_max_load_factor(self.max_load_factor)
            .with_hash_strategy(self.hash_strategy);

        match &self.diagnostics_file {
            Some(path) => config.with_diagnostics_file(path),
            None => config,
        }
    }
}

impl Validate for TableSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.initial_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if !(self.max_load_factor > 0.0 && self.max_load_factor <= 1.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.max_load_factor".to_string(),
                message: format!("must be in (0, 1], got {}", self.max_load_factor),
            });
        }

        Ok(())
    }
}
