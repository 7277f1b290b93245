//! Data structures for chainset.
//!
//! This module contains the string-set containers used by the line
//! comparison tool. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit error types for invalid input and configuration
//! - Read-only introspection that never disturbs stored data

pub mod chained_hash_set;

// Re-export common data structures
pub use chained_hash_set::{ChainedHashSet, ChainedHashSetConfig, ChainedHashSetError};
