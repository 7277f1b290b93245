// Copyright (c) 2025 Chainset Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Chained hash set for string membership.
//!
//! A set of strings backed by open hashing with separate chaining. Each bucket
//! holds an ordered chain of values; a value is only ever stored once.
//!
//! # Features
//!
//! - Insert, delete and lookup with set semantics
//! - Automatic doubling when the prospective load factor passes a threshold
//! - Collision statistics recomputed at every resize
//! - Optional resize diagnostics appended to a file
//! - Non-destructive dump of every bucket
//!
//! # Example
//!
//! ```
//! use chainset_lib::data_structures::chained_hash_set::{ChainedHashSet, ChainedHashSetConfig};
//!
//! let mut set = ChainedHashSet::new(10).unwrap();
//! for value in ["mom", "dad", ".....", "10142000", "testing123", "omm"] {
//!     set.insert(value);
//! }
//! assert_eq!(set.size(), 6);
//! assert_eq!(set.capacity(), 10);
//!
//! // The seventh value would push the load factor to 0.70, so the table
//! // doubles before placing it.
//! set.insert("pneumonoultramicroscopicsilicovolcanoconiosis...");
//! assert_eq!(set.size(), 7);
//! assert_eq!(set.capacity(), 20);
//!
//! let config = ChainedHashSetConfig::new()
//!     .with_initial_capacity(4)
//!     .with_max_load_factor(0.5);
//! let set = ChainedHashSet::with_config(config).unwrap();
//! assert!(set.is_empty());
//! ```
//!
//! # Collision statistics
//!
//! Every bucket carries a counter that starts at 1 and is bumped whenever an
//! insert lands in that bucket while it already holds a value. The counters
//! are reset at each resize and rebuilt from the redistribution, and they are
//! never lowered by a delete. The "longest chain" reported in diagnostics is
//! the largest of these counters.

mod bucket;
mod config;
mod diagnostics;
mod error;
mod hash;
mod policy;
mod table;

#[cfg(test)]
mod tests;

// Re-exports
pub use config::{ChainedHashSetConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_LOAD_FACTOR};
pub use diagnostics::TableStatistics;
pub use error::{ChainedHashSetError, Result};
pub use hash::HashStrategy;
pub use policy::ResizePolicy;
pub use table::ChainedHashSet;
