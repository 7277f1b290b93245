//! Overlap computation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::data_structures::chained_hash_set::{ChainedHashSet, ChainedHashSetConfig};
use crate::error::{ChainsetError, ChainsetResult};

/// Fewest files a comparison accepts.
pub const MIN_FILES: usize = 2;

/// Share of one file's lines found in each of the other files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOverlap {
    /// The file whose lines were counted
    pub path: PathBuf,

    /// Number of lines in the file, duplicates included
    pub total_lines: usize,

    /// `(other file, percentage)` in argument order, skipping the file itself
    pub shared: Vec<(PathBuf, u32)>,
}

/// Result of comparing a group of files, one entry per input in argument order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlapReport {
    pub files: Vec<FileOverlap>,
}

impl OverlapReport {
    /// Percentage of `source`'s lines that also occur in `other`.
    pub fn percentage(&self, source: &Path, other: &Path) -> Option<u32> {
        self.files
            .iter()
            .find(|f| f.path == source)?
            .shared
            .iter()
            .find(|(p, _)| p == other)
            .map(|(_, pct)| *pct)
    }
}

/// Reads every line of `path`, without line terminators.
///
/// # Errors
///
/// Returns [`ChainsetError::FileRead`] if the file cannot be opened or a line
/// cannot be read.
pub fn read_lines(path: &Path) -> ChainsetResult<Vec<String>> {
    let file_error = |source| ChainsetError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_error)?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(file_error)
}

/// Compares the lines of every file against every other file.
///
/// For each file, the percentage reported against another file is
/// `floor(shared * 100 / total)`, where `total` counts every line of the
/// source file and `shared` counts those lines, duplicates included, that the
/// other file also contains. An empty source file reports 0%.
///
/// # Errors
///
/// * [`ChainsetError::NotEnoughFiles`] if fewer than two paths are given
/// * [`ChainsetError::FileRead`] if any file cannot be read; nothing is compared
/// * [`ChainsetError::Table`] if `table_config` is invalid
pub fn compare_files<P: AsRef<Path>>(
    paths: &[P],
    table_config: &ChainedHashSetConfig,
) -> ChainsetResult<OverlapReport> {
    if paths.len() < MIN_FILES {
        return Err(ChainsetError::NotEnoughFiles(paths.len()));
    }

    let mut contents = Vec::with_capacity(paths.len());
    let mut tables = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let lines = read_lines(path)?;

        let mut table = ChainedHashSet::with_config(table_config.clone())?;
        for line in &lines {
            table.insert(line);
        }
        debug!(
            path = %path.display(),
            lines = lines.len(),
            distinct = table.size(),
            capacity = table.capacity(),
            "Loaded file"
        );

        contents.push(lines);
        tables.push(table);
    }

    let files = paths
        .iter()
        .zip(&contents)
        .enumerate()
        .map(|(i, (path, lines))| {
            let shared = paths
                .iter()
                .zip(&tables)
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, (other, table))| {
                    let count = lines.iter().filter(|line| table.lookup(line)).count();
                    (other.as_ref().to_path_buf(), percentage(count, lines.len()))
                })
                .collect();

            FileOverlap {
                path: path.as_ref().to_path_buf(),
                total_lines: lines.len(),
                shared,
            }
        })
        .collect();

    info!(files = paths.len(), "Compared files");
    Ok(OverlapReport { files })
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count * 100 / total) as u32
}
