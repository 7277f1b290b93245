// Copyright (c) 2025 Chainset Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the chained hash set.
//!
//! Values live in a vector of buckets, each an ordered chain. The table grows
//! by doubling, synchronously, inside the insert that would push the rounded
//! load factor past the configured threshold. Every resize rehashes all values
//! into a fresh bucket vector and recomputes the collision statistics from
//! that redistribution alone.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::data_structures::chained_hash_set::bucket::Bucket;
use crate::data_structures::chained_hash_set::config::ChainedHashSetConfig;
use crate::data_structures::chained_hash_set::diagnostics::{DiagnosticsReporter, TableStatistics};
use crate::data_structures::chained_hash_set::error::{ChainedHashSetError, Result};
use crate::data_structures::chained_hash_set::hash::BucketHasher;
use crate::data_structures::chained_hash_set::policy::ResizePolicy;

const ABSENT_VALUE: &str = "value must not be absent";

/// A set of strings stored in a separately chained hash table.
///
/// # Examples
///
/// ```
/// use chainset_lib::data_structures::chained_hash_set::ChainedHashSet;
///
/// let mut set = ChainedHashSet::new(10).unwrap();
/// assert!(set.insert("mom"));
/// assert!(!set.insert("mom"));
/// assert!(set.lookup("mom"));
/// assert_eq!(set.size(), 1);
///
/// assert!(set.delete("mom"));
/// assert!(!set.lookup("mom"));
/// ```
#[derive(Debug)]
pub struct ChainedHashSet {
    /// One chain per bucket index; the length is the capacity
    buckets: Vec<Bucket>,

    /// Number of stored values, always the sum of the chain lengths
    element_count: usize,

    /// Collisions since the last resize
    collision_count: usize,

    /// Resizes over the lifetime of the table
    resize_count: usize,

    /// Per-bucket collision occurrences since the last resize, starting at 1
    chain_collisions: Vec<usize>,

    policy: ResizePolicy,
    hasher: Box<dyn BucketHasher>,
    diagnostics: DiagnosticsReporter,
    config: ChainedHashSetConfig,
}

impl ChainedHashSet {
    /// Creates an empty set with `initial_capacity` buckets and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ChainedHashSetError::InvalidConfiguration`] if the capacity is zero.
    pub fn new(initial_capacity: usize) -> Result<Self> {
        Self::with_config(ChainedHashSetConfig::new().with_initial_capacity(initial_capacity))
    }

    /// Creates an empty set from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChainedHashSetError::InvalidConfiguration`] if the configuration
    /// does not validate.
    pub fn with_config(config: ChainedHashSetConfig) -> Result<Self> {
        config.validate()?;

        let capacity = config.initial_capacity;
        Ok(Self {
            buckets: empty_buckets(capacity),
            element_count: 0,
            collision_count: 0,
            resize_count: 0,
            chain_collisions: vec![1; capacity],
            policy: ResizePolicy::new(config.max_load_factor),
            hasher: config.hash_strategy.hasher(),
            diagnostics: DiagnosticsReporter::new(config.diagnostics_file.clone()),
            config,
        })
    }

    /// Inserts `value` unless it is already present.
    ///
    /// If the insert would lift the rounded load factor above the threshold,
    /// the table doubles and rehashes first, and the value is placed against
    /// the new capacity.
    ///
    /// # Returns
    ///
    /// `true` if the value was added, `false` if it was already in the set.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.lookup(value) {
            return false;
        }

        if self.policy.should_grow(self.element_count, self.capacity()) {
            self.resize();
        }

        self.place(value.to_owned());
        self.element_count += 1;
        true
    }

    /// Removes `value` from the set.
    ///
    /// Collision statistics are left untouched.
    ///
    /// # Returns
    ///
    /// `true` if the value was present and removed, `false` otherwise.
    pub fn delete(&mut self, value: &str) -> bool {
        let index = self.index_of(value);
        if self.buckets[index].remove(value) {
            self.element_count -= 1;
            true
        } else {
            false
        }
    }

    /// Reports whether `value` is in the set.
    pub fn lookup(&self, value: &str) -> bool {
        self.buckets[self.index_of(value)].contains(value)
    }

    /// [`insert`](Self::insert) for callers holding an optional value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainedHashSetError::InvalidArgument`] if `value` is `None`;
    /// the table is not touched.
    pub fn try_insert(&mut self, value: Option<&str>) -> Result<bool> {
        Ok(self.insert(require(value)?))
    }

    /// [`delete`](Self::delete) for callers holding an optional value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainedHashSetError::InvalidArgument`] if `value` is `None`.
    pub fn try_delete(&mut self, value: Option<&str>) -> Result<bool> {
        Ok(self.delete(require(value)?))
    }

    /// [`lookup`](Self::lookup) for callers holding an optional value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainedHashSetError::InvalidArgument`] if `value` is `None`.
    pub fn try_lookup(&self, value: Option<&str>) -> Result<bool> {
        Ok(self.lookup(require(value)?))
    }

    /// Number of values in the set.
    pub fn size(&self) -> usize {
        self.element_count
    }

    pub fn is_empty(&self) -> bool {
        self.element_count == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Unrounded ratio of stored values to buckets.
    pub fn load_factor(&self) -> f64 {
        self.element_count as f64 / self.capacity() as f64
    }

    /// Collisions recorded since the last resize.
    pub fn collision_count(&self) -> usize {
        self.collision_count
    }

    /// Resizes performed since construction.
    pub fn resize_count(&self) -> usize {
        self.resize_count
    }

    /// Largest per-bucket collision-occurrence counter since the last resize.
    ///
    /// Counters start at 1 and grow on every insert that lands in an occupied
    /// bucket. Deletes do not lower them, so this is a record of how crowded a
    /// bucket has been, not of how long any chain is now. See
    /// [`longest_live_chain`](Self::longest_live_chain) for the latter.
    pub fn longest_chain(&self) -> usize {
        self.chain_collisions.iter().copied().max().unwrap_or(1)
    }

    /// Length of the longest chain currently in the table.
    pub fn longest_live_chain(&self) -> usize {
        self.buckets.iter().map(Bucket::len).max().unwrap_or(0)
    }

    /// Snapshot of the values reported by the diagnostics line.
    pub fn statistics(&self) -> TableStatistics {
        TableStatistics {
            resizes: self.resize_count,
            load_factor: ResizePolicy::prospective_load_factor(self.element_count, self.capacity()),
            collisions: self.collision_count,
            longest_chain: self.longest_chain(),
        }
    }

    /// Appends the current statistics to the diagnostics file.
    ///
    /// # Returns
    ///
    /// `false` if diagnostics are disabled or the file could not be written.
    pub fn print_statistics(&self) -> bool {
        self.diagnostics.report(&self.statistics())
    }

    /// The configuration the table was built with.
    pub fn config(&self) -> &ChainedHashSetConfig {
        &self.config
    }

    /// Prints every bucket to standard output, one line per index.
    ///
    /// # Errors
    ///
    /// Propagates failures writing to standard output.
    pub fn dump(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_dump(&mut out)?;
        out.flush()
    }

    /// Writes every bucket to `out`, one line per index.
    ///
    /// Empty buckets render as `"<index>:"`, others as
    /// `"<index>: v1, v2, ..."` in insertion order. The table is unchanged.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    fn index_of(&self, value: &str) -> usize {
        self.hasher.bucket_index(value, self.capacity())
    }

    /// Append `value` to its chain, counting a collision if the chain is occupied.
    fn place(&mut self, value: String) {
        let index = self.index_of(&value);
        if !self.buckets[index].is_empty() {
            self.collision_count += 1;
            self.chain_collisions[index] += 1;
        }
        self.buckets[index].push(value);
    }

    fn resize(&mut self) {
        self.resize_count += 1;
        if self.diagnostics.is_enabled() {
            // The outcome is logged by the reporter; a failed write never
            // stops the resize.
            self.print_statistics();
        }

        let old_capacity = self.capacity();
        let new_capacity = ResizePolicy::next_capacity(old_capacity);
        let old_buckets = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.chain_collisions = vec![1; new_capacity];
        self.collision_count = 0;

        for value in old_buckets.into_iter().flat_map(Bucket::into_values) {
            self.place(value);
        }

        debug!(
            old_capacity,
            new_capacity,
            elements = self.element_count,
            collisions = self.collision_count,
            resizes = self.resize_count,
            "Resized chained hash set"
        );
    }
}

/// One line per bucket index, as written by [`ChainedHashSet::write_dump`].
impl fmt::Display for ChainedHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            if bucket.is_empty() {
                writeln!(f, "{index}:")?;
            } else {
                writeln!(f, "{index}: {bucket}")?;
            }
        }
        Ok(())
    }
}

fn empty_buckets(capacity: usize) -> Vec<Bucket> {
    (0..capacity).map(|_| Bucket::new()).collect()
}

fn require(value: Option<&str>) -> Result<&str> {
    value.ok_or(ChainedHashSetError::InvalidArgument(ABSENT_VALUE))
}
