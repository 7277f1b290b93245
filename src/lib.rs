//! Chainset Library
//!
//! This library contains the core components of chainset: a string set built
//! on a separately chained hash table, the configuration and error types
//! around it, and the line overlap comparison built on top of it. The library
//! is designed to be used by the binary crate, but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::chained_hash_set`]: the hash set engine (hashing,
//!   resize policy, collision statistics, diagnostics, dump)
//! - [`compare`]: pure overlap computation plus a thin text renderer
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: crate-wide error types

// Re-export public modules
pub mod compare;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for chainset.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
