// Copyright (c) 2025 Chainset Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! A single chain of the hash set.

use std::fmt;

/// Ordered values sharing one bucket index.
///
/// The bucket does not reject duplicates itself; the table only pushes a value
/// after a failed lookup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Bucket {
    values: Vec<String>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Append a value at the end of the chain.
    pub fn push(&mut self, value: String) {
        self.values.push(value);
    }

    /// Remove the first value equal to `value`, keeping the order of the rest.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(pos) => {
                self.values.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Consume the bucket, yielding its values in chain order.
    pub fn into_values(self) -> std::vec::IntoIter<String> {
        self.values.into_iter()
    }
}

/// Renders the chain as `v1, v2, ...`.
impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}
