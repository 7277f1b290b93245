// Copyright (c) 2025 Chainset Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the chained hash set.

use std::path::{Path, PathBuf};

use crate::data_structures::chained_hash_set::error::{ChainedHashSetError, Result};
use crate::data_structures::chained_hash_set::hash::HashStrategy;

/// Load factor above which an insert grows the table.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.67;

/// Bucket count used when no capacity is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 20;

/// Configuration for the chained hash set.
///
/// Everything here is fixed once the table is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainedHashSetConfig {
    /// Number of buckets allocated up front. Must be positive.
    pub initial_capacity: usize,

    /// Rounded prospective load factor that, once exceeded, doubles the table.
    pub max_load_factor: f64,

    /// Strategy used to map values to buckets.
    pub hash_strategy: HashStrategy,

    /// File that receives one statistics line per resize.
    /// Diagnostics are enabled exactly when this is set.
    pub diagnostics_file: Option<PathBuf>,
}

impl ChainedHashSetConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial number of buckets.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the load factor threshold that triggers a resize.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    /// Sets the bucket hashing strategy.
    pub fn with_hash_strategy(mut self, hash_strategy: HashStrategy) -> Self {
        self.hash_strategy = hash_strategy;
        self
    }

    /// Enables diagnostics, appending statistics to `path` on every resize.
    pub fn with_diagnostics_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.diagnostics_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Whether resize statistics will be written.
    pub fn diagnostics_enabled(&self) -> bool {
        self.diagnostics_file.is_some()
    }

    /// Checks that the configuration describes a usable table.
    ///
    /// # Errors
    ///
    /// Returns [`ChainedHashSetError::InvalidConfiguration`] for a zero capacity
    /// or a load factor outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ChainedHashSetError::InvalidConfiguration(
                "initial_capacity must be greater than 0".to_string(),
            ));
        }

        if !(self.max_load_factor > 0.0 && self.max_load_factor <= 1.0) {
            return Err(ChainedHashSetError::InvalidConfiguration(format!(
                "max_load_factor must be in (0, 1], got {}",
                self.max_load_factor
            )));
        }

        Ok(())
    }
}

impl Default for ChainedHashSetConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hash_strategy: HashStrategy::Additive,
            diagnostics_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChainedHashSetConfig::default();
        assert_eq!(config.initial_capacity, 20);
        assert_eq!(config.max_load_factor, 0.67);
        assert_eq!(config.hash_strategy, HashStrategy::Additive);
        assert!(!config.diagnostics_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ChainedHashSetConfig::new()
            .with_initial_capacity(4)
            .with_max_load_factor(0.5)
            .with_hash_strategy(HashStrategy::Fnv)
            .with_diagnostics_file("stats.txt");

        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.max_load_factor, 0.5);
        assert_eq!(config.hash_strategy, HashStrategy::Fnv);
        assert_eq!(config.diagnostics_file, Some(PathBuf::from("stats.txt")));
        assert!(config.diagnostics_enabled());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = ChainedHashSetConfig::new().with_initial_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(ChainedHashSetError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_load_factor_bounds() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let config = ChainedHashSetConfig::new().with_max_load_factor(bad);
            assert!(config.validate().is_err(), "{bad} should be rejected");
        }
        let config = ChainedHashSetConfig::new().with_max_load_factor(1.0);
        assert!(config.validate().is_ok());
    }
}
