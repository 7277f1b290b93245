//! Line overlap comparison between files.
//!
//! Every input file is loaded into its own [`ChainedHashSet`], one entry per
//! distinct line. Each file's lines are then looked up in every other file's
//! set, giving the share of its lines that also appear there.
//!
//! Computing the figures ([`compare_files`]) is kept separate from printing
//! them ([`render_report`]).
//!
//! [`ChainedHashSet`]: crate::data_structures::chained_hash_set::ChainedHashSet

mod overlap;
mod report;

pub use overlap::{compare_files, read_lines, FileOverlap, OverlapReport, MIN_FILES};
pub use report::render_report;
