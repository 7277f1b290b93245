//! Console presentation of an overlap report.

use std::io::{self, Write};

use super::overlap::OverlapReport;

/// Writes `report` in the tool's text format.
///
/// Each file gets a blank line, a `"<file>:"` header, and one
/// `"<pct>% of lines are also in <other>"` line per other file.
pub fn render_report<W: Write>(report: &OverlapReport, out: &mut W) -> io::Result<()> {
    for file in &report.files {
        writeln!(out)?;
        writeln!(out, "{}:", file.path.display())?;
        for (other, pct) in &file.shared {
            writeln!(out, "{pct}% of lines are also in {}", other.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::FileOverlap;
    use std::path::PathBuf;

    #[test]
    fn test_render_format() {
        let report = OverlapReport {
            files: vec![
                FileOverlap {
                    path: PathBuf::from("a.txt"),
                    total_lines: 10,
                    shared: vec![(PathBuf::from("b.txt"), 30)],
                },
                FileOverlap {
                    path: PathBuf::from("b.txt"),
                    total_lines: 4,
                    shared: vec![(PathBuf::from("a.txt"), 75)],
                },
            ],
        };

        let mut out = Vec::new();
        render_report(&report, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\na.txt:\n30% of lines are also in b.txt\n\nb.txt:\n75% of lines are also in a.txt\n"
        );
    }

    #[test]
    fn test_render_empty_report() {
        let mut out = Vec::new();
        render_report(&OverlapReport::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
