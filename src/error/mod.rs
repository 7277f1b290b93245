//! Error module for chainset.
//!
//! This module provides the error types for the whole crate, following Rust's
//! idiomatic error handling patterns with explicit error types, proper error
//! propagation, and helpful context information.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::chained_hash_set::ChainedHashSetError;

pub mod config;

/// Result type alias used throughout chainset.
pub type ChainsetResult<T> = Result<T, ChainsetError>;

/// Core error enum for chainset.
#[derive(Error, Debug)]
pub enum ChainsetError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the hash set itself.
    #[error("Table error: {0}")]
    Table(#[from] ChainedHashSetError),

    /// An input file could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        /// The file being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The comparison needs at least two files.
    #[error("Invalid number of arguments passed: expected at least 2 files, got {0}")]
    NotEnoughFiles(usize),

    /// IO errors that may occur during output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: ChainsetError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: ChainsetError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Logs the error through `tracing` and hands the error back.
    pub fn report(self) -> ChainsetError {
        tracing::error!(
            error = %self.error,
            component = %self.component,
            details = self.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
        self.error
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}
