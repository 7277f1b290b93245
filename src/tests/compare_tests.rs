//! Tests for the line comparison over real files.

use crate::compare::{compare_files, render_report};
use crate::data_structures::chained_hash_set::{ChainedHashSetConfig, HashStrategy};
use crate::tests::{line_strategy, TestFixture};
use proptest::prelude::*;

/// Ten lines in A, three of which also occur in B.
#[test]
fn test_thirty_percent_overlap() {
    let fixture = TestFixture::new().unwrap();
    let a = fixture
        .write_lines(
            "a.txt",
            &["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"],
        )
        .unwrap();
    let b = fixture
        .write_lines("b.txt", &["two", "zwei", "five", "ten", "elf"])
        .unwrap();

    let report = compare_files(&[&a, &b], &ChainedHashSetConfig::default()).unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].total_lines, 10);
    assert_eq!(report.percentage(&a, &b), Some(30));
    assert_eq!(report.percentage(&b, &a), Some(60));
    assert_eq!(report.percentage(&a, &a), None);
}

/// Duplicate lines in the source count once per occurrence.
#[test]
fn test_duplicates_counted_per_line() {
    let fixture = TestFixture::new().unwrap();
    let a = fixture.write_lines("a.txt", &["x", "x", "x", "y"]).unwrap();
    let b = fixture.write_lines("b.txt", &["x"]).unwrap();

    let report = compare_files(&[&a, &b], &ChainedHashSetConfig::default()).unwrap();

    assert_eq!(report.percentage(&a, &b), Some(75));
    assert_eq!(report.percentage(&b, &a), Some(100));
}

/// Every file is compared against every other file, in argument order.
#[test]
fn test_three_files_render() {
    let fixture = TestFixture::new().unwrap();
    let a = fixture.write_lines("a.txt", &["1", "2", "3"]).unwrap();
    let b = fixture.write_lines("b.txt", &["1", "2"]).unwrap();
    let c = fixture.write_file("c.txt", "").unwrap();

    let report = compare_files(&[&a, &b, &c], &ChainedHashSetConfig::default()).unwrap();
    let mut out = Vec::new();
    render_report(&report, &mut out).unwrap();

    let expected = format!(
        "\n{a}:\n66% of lines are also in {b}\n0% of lines are also in {c}\n\
         \n{b}:\n100% of lines are also in {a}\n0% of lines are also in {c}\n\
         \n{c}:\n0% of lines are also in {a}\n0% of lines are also in {b}\n",
        a = a.display(),
        b = b.display(),
        c = c.display(),
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

/// Small tables grow while loading and still answer correctly.
#[test]
fn test_small_initial_capacity() {
    let fixture = TestFixture::new().unwrap();
    let lines: Vec<String> = (0..200).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let a = fixture.write_lines("a.txt", &refs).unwrap();
    let b = fixture.write_lines("b.txt", &refs[..50]).unwrap();

    let config = ChainedHashSetConfig::new().with_initial_capacity(1);
    let report = compare_files(&[&a, &b], &config).unwrap();

    assert_eq!(report.percentage(&a, &b), Some(25));
    assert_eq!(report.percentage(&b, &a), Some(100));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Property: the hash strategy never changes the reported figures
    #[test]
    fn prop_strategy_independent(
        left in prop::collection::vec(line_strategy(6), 1..30),
        right in prop::collection::vec(line_strategy(6), 1..30),
    ) {
        let fixture = TestFixture::new().unwrap();
        let left_refs: Vec<&str> = left.iter().map(String::as_str).collect();
        let right_refs: Vec<&str> = right.iter().map(String::as_str).collect();
        let a = fixture.write_lines("a.txt", &left_refs).unwrap();
        let b = fixture.write_lines("b.txt", &right_refs).unwrap();

        let additive = compare_files(&[&a, &b], &ChainedHashSetConfig::default()).unwrap();
        let fnv = compare_files(
            &[&a, &b],
            &ChainedHashSetConfig::new().with_hash_strategy(HashStrategy::Fnv),
        )
        .unwrap();
        prop_assert_eq!(&additive, &fnv);

        let shared = left.iter().filter(|l| right.contains(l)).count();
        let expected = (shared * 100 / left.len()) as u32;
        prop_assert_eq!(additive.percentage(&a, &b), Some(expected));
    }
}
