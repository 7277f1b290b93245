// Copyright (c) 2025 Chainset Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Growth policy for the chained hash set.
//!
//! The policy looks at the load factor the table *would* have after the
//! pending insert, rounded to two decimal places, and asks for a doubling when
//! that value is strictly above the threshold.

/// Decides when an insert must grow the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePolicy {
    max_load_factor: f64,
}

impl ResizePolicy {
    /// Capacity multiplier applied on every resize.
    pub const GROWTH_FACTOR: usize = 2;

    /// Create a policy with the given threshold.
    pub fn new(max_load_factor: f64) -> Self {
        Self { max_load_factor }
    }

    /// The configured threshold.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Load factor after one more element, rounded to two decimal places.
    pub fn prospective_load_factor(element_count: usize, capacity: usize) -> f64 {
        round_hundredths((element_count + 1) as f64 / capacity as f64)
    }

    /// Whether inserting one more element into a table of `capacity` buckets
    /// holding `element_count` values requires a resize first.
    pub fn should_grow(&self, element_count: usize, capacity: usize) -> bool {
        Self::prospective_load_factor(element_count, capacity) > self.max_load_factor
    }

    /// Capacity the table moves to when it grows.
    pub fn next_capacity(capacity: usize) -> usize {
        capacity * Self::GROWTH_FACTOR
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
