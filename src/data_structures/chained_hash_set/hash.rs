// Copyright (c) 2025 Chainset Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket hashing for the chained hash set.
//!
//! The default strategy is an additive checksum: the sum of the character codes
//! of a string, reduced modulo the bucket count. It is cheap and deterministic
//! but collides for any two strings whose codes add up to the same total
//! (permutations such as `"mom"` and `"omm"` always share a bucket). Tables that
//! need a better spread can opt into the FNV-1a strategy instead.

use std::hash::Hasher;

use serde::{Deserialize, Serialize};

/// Maps a string to a bucket index for a given capacity.
pub(crate) trait BucketHasher: std::fmt::Debug + Send + Sync {
    /// Compute the bucket index of `value` in a table of `capacity` buckets.
    ///
    /// `capacity` is always non-zero. The result is in `0..capacity`.
    fn bucket_index(&self, value: &str, capacity: usize) -> usize;
}

/// Sum of the Unicode scalar values of a string, modulo the capacity.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct AdditiveHasher;

impl BucketHasher for AdditiveHasher {
    fn bucket_index(&self, value: &str, capacity: usize) -> usize {
        // Reducing at every step keeps the accumulator below `capacity`.
        value
            .chars()
            .fold(0usize, |acc, c| (acc + c as usize) % capacity)
    }
}

/// FNV-1a over the UTF-8 bytes of a string, modulo the capacity.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FnvBucketHasher;

impl BucketHasher for FnvBucketHasher {
    fn bucket_index(&self, value: &str, capacity: usize) -> usize {
        let mut hasher = fnv::FnvHasher::default();
        hasher.write(value.as_bytes());
        (hasher.finish() % capacity as u64) as usize
    }
}

/// Selects the bucket hashing strategy of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashStrategy {
    /// Additive character-code checksum
    #[default]
    Additive,
    /// FNV-1a
    Fnv,
}

impl HashStrategy {
    /// Build the hasher implementing this strategy.
    pub(crate) fn hasher(self) -> Box<dyn BucketHasher> {
        match self {
            Self::Additive => Box::new(AdditiveHasher),
            Self::Fnv => Box::new(FnvBucketHasher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("mom", 10, 9; "mom in ten")]
    #[test_case("dad", 10, 7; "dad in ten")]
    #[test_case(".....", 10, 0; "dots in ten")]
    #[test_case("10142000", 10, 2; "digits in ten")]
    #[test_case("testing123", 10, 6; "mixed in ten")]
    #[test_case("!", 20, 13; "bang in twenty")]
    #[test_case("3", 20, 11; "three in twenty")]
    #[test_case("", 7, 0; "empty string")]
    fn test_additive_index(value: &str, capacity: usize, expected: usize) {
        assert_eq!(AdditiveHasher.bucket_index(value, capacity), expected);
    }

    #[test]
    fn test_additive_permutations_collide() {
        for capacity in [3, 10, 64, 1_000] {
            assert_eq!(
                AdditiveHasher.bucket_index("mom", capacity),
                AdditiveHasher.bucket_index("omm", capacity)
            );
        }
    }

    #[test]
    fn test_additive_matches_plain_sum() {
        let value = "pneumonoultramicroscopicsilicovolcanoconiosis...";
        let sum: usize = value.chars().map(|c| c as usize).sum();
        assert_eq!(AdditiveHasher.bucket_index(value, 20), sum % 20);
        assert_eq!(AdditiveHasher.bucket_index(value, 20), 18);
    }

    #[test]
    fn test_fnv_in_range_and_deterministic() {
        for capacity in [1, 2, 17, 1_024] {
            let first = FnvBucketHasher.bucket_index("hello", capacity);
            assert!(first < capacity);
            assert_eq!(first, FnvBucketHasher.bucket_index("hello", capacity));
        }
    }

    #[test]
    fn test_fnv_separates_permutations() {
        assert_ne!(
            FnvBucketHasher.bucket_index("mom", 1_024),
            FnvBucketHasher.bucket_index("omm", 1_024)
        );
    }

    #[test]
    fn test_strategy_dispatch() {
        assert_eq!(HashStrategy::default(), HashStrategy::Additive);
        assert_eq!(HashStrategy::Additive.hasher().bucket_index("mom", 10), 9);
        let fnv = HashStrategy::Fnv.hasher();
        assert_eq!(
            fnv.bucket_index("mom", 1_024),
            FnvBucketHasher.bucket_index("mom", 1_024)
        );
    }
}
