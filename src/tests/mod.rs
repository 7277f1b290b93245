//! Test modules for chainset.
//!
//! This module contains crate-level testing infrastructure, including:
//! - Configuration loading and validation tests
//! - Error formatting and conversion tests
//! - Line comparison tests over real files
//! - Test fixtures and utilities

pub mod compare_tests;

pub use test_utils::{line_strategy, TestFixture};
