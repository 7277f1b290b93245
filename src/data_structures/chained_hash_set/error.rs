// Copyright (c) 2025 Chainset Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the chained hash set.

/// Errors that can occur in chained hash set operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ChainedHashSetError {
    /// A required value was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The table was constructed with an invalid configuration
    #[error("Invalid table configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for chained hash set operations
pub type Result<T> = std::result::Result<T, ChainedHashSetError>;
