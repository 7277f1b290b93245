// Copyright (c) 2025 Chainset Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Resize diagnostics for the chained hash set.
//!
//! When a table is built with a diagnostics file, every resize appends one line
//! to that file describing the table just before it grew:
//!
//! ```text
//! 2 resizes, load factor 0.75, 1 collisions, 2 longest chain
//! ```
//!
//! The file is opened in append mode for each line and closed again before the
//! call returns, whether or not the write succeeded. A failed write never
//! affects the table.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Snapshot of the collision statistics of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStatistics {
    /// Resizes performed over the lifetime of the table
    pub resizes: usize,

    /// Prospective load factor, rounded to two decimal places
    pub load_factor: f64,

    /// Collisions recorded since the last resize
    pub collisions: usize,

    /// Largest per-bucket collision-occurrence counter since the last resize
    pub longest_chain: usize,
}

impl fmt::Display for TableStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} resizes, load factor {:.2}, {} collisions, {} longest chain",
            self.resizes, self.load_factor, self.collisions, self.longest_chain
        )
    }
}

/// Writes statistics lines to the configured file, if any.
#[derive(Debug, Clone, Default)]
pub(crate) struct DiagnosticsReporter {
    sink: Option<PathBuf>,
}

impl DiagnosticsReporter {
    pub fn new(sink: Option<PathBuf>) -> Self {
        Self { sink }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Append `stats` as one line to the sink.
    ///
    /// Returns `false` when diagnostics are disabled or the sink could not be
    /// opened or written.
    pub fn report(&self, stats: &TableStatistics) -> bool {
        let Some(path) = self.sink.as_deref() else {
            return false;
        };

        match append_line(path, stats) {
            Ok(()) => {
                debug!(sink = %path.display(), %stats, "Wrote table statistics");
                true
            }
            Err(e) => {
                warn!(sink = %path.display(), error = %e, "Failed to write table statistics");
                false
            }
        }
    }
}

fn append_line(path: &Path, stats: &TableStatistics) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{stats}")?;
    file.flush()
}
