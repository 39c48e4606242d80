//! Histogram CSV adapter tests against real files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lumapipe_adapters::histogram_csv::{export, import, HistogramCsvError};
use lumapipe_core::{Histogram, BINS};

fn sample_histogram() -> Histogram {
    let mut bins = [0u64; BINS];
    bins[0] = 12;
    bins[29] = 3;
    bins[127] = 40_000;
    bins[255] = 7;
    Histogram::from_bins(bins)
}

#[test]
fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");

    let original = sample_histogram();
    export(&original, "queen-mary", &path).unwrap();
    let restored = import(&path).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn test_export_format_is_three_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");

    export(&sample_histogram(), "label", &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "label");
    assert!(lines[1].starts_with("0,1,2,"));
    assert!(lines[1].ends_with("255,"), "bin line keeps trailing comma");
    assert!(lines[2].starts_with("12,0,"));
    assert!(lines[2].ends_with(','), "count line keeps trailing comma");
    assert_eq!(lines[1].split(',').count(), BINS + 1);
}

#[test]
fn test_label_and_bin_lines_ignored_on_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");

    // Garbage in the first two lines must not matter.
    let mut counts = String::new();
    for i in 0..BINS {
        counts.push_str(&i.to_string());
        counts.push(',');
    }
    std::fs::write(&path, format!("not,a,label\nxyz\n{counts}")).unwrap();

    let hist = import(&path).unwrap();
    assert_eq!(hist.count(0), 0);
    assert_eq!(hist.count(255), 255);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");

    let err = import(&path).unwrap_err();
    assert!(matches!(err, HistogramCsvError::FileMissing(_)));
}

#[test]
fn test_truncated_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");
    std::fs::write(&path, "label\n0,1,2,\n").unwrap();

    let err = import(&path).unwrap_err();
    assert!(matches!(err, HistogramCsvError::Truncated));
}

#[test]
fn test_bad_token_aborts_whole_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");
    std::fs::write(&path, "label\nbins\n1,2,oops,4,\n").unwrap();

    let err = import(&path).unwrap_err();
    match err {
        HistogramCsvError::Parse { bin, token, .. } => {
            assert_eq!(bin, 2);
            assert_eq!(token, "oops");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_repeated_trailing_commas_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");
    std::fs::write(&path, "label\nbins\n5,6,7,,\n").unwrap();

    let hist = import(&path).unwrap();
    assert_eq!(hist.count(0), 5);
    assert_eq!(hist.count(2), 7);
    assert_eq!(hist.total(), 18);
}

#[test]
fn test_interior_empty_token_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");
    std::fs::write(&path, "label\nbins\n5,,7,\n").unwrap();

    let err = import(&path).unwrap_err();
    assert!(matches!(err, HistogramCsvError::Parse { bin: 1, .. }));
}

#[test]
fn test_short_count_line_leaves_high_bins_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");
    std::fs::write(&path, "label\nbins\n5,6,7\n").unwrap();

    let hist = import(&path).unwrap();
    assert_eq!(hist.count(0), 5);
    assert_eq!(hist.count(2), 7);
    assert_eq!(hist.count(3), 0);
    assert_eq!(hist.total(), 18);
}

#[test]
fn test_excess_counts_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");

    let mut counts = String::new();
    for _ in 0..300 {
        counts.push_str("1,");
    }
    std::fs::write(&path, format!("label\nbins\n{counts}\n")).unwrap();

    let err = import(&path).unwrap_err();
    assert!(matches!(err, HistogramCsvError::ExcessCounts { .. }));
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histogram.csv");
    std::fs::write(&path, "stale content that is much longer than the new one\n").unwrap();

    let empty = Histogram::default();
    export(&empty, "fresh", &path).unwrap();

    let restored = import(&path).unwrap();
    assert_eq!(restored, empty);
}
