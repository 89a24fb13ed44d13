// 出力ラベル集合の決定性テスト
// 計測値は実行ごとに変動するが、ラベルの並びは毎回同一でなければならない

use dispatch_lab::runner::MeasureSession;
use dispatch_lab::services::{DefaultSuiteConfig, MemoryReporter};

#[test]
fn test_two_runs_produce_identical_label_sequences() {
    let mut first = MeasureSession::new(DefaultSuiteConfig::new(50), MemoryReporter::new());
    first.run_full_suite().unwrap();
    let first_labels = first.reporter().segment_labels();

    let mut second = MeasureSession::new(DefaultSuiteConfig::new(50), MemoryReporter::new());
    second.run_full_suite().unwrap();
    let second_labels = second.reporter().segment_labels();

    assert_eq!(first_labels, second_labels);
    assert_eq!(first_labels.len(), 10);
}

#[test]
fn test_repeated_runs_on_same_session_accumulate_records() {
    let mut session = MeasureSession::new(DefaultSuiteConfig::new(10), MemoryReporter::new());

    session.run_full_suite().unwrap();
    assert_eq!(session.records().len(), 10);

    session.run_full_suite().unwrap();
    assert_eq!(session.records().len(), 20);
}

#[test]
fn test_warmup_toggle_does_not_change_label_set() {
    let mut with_warmup = MeasureSession::new(
        DefaultSuiteConfig::new(10).with_warmup(true),
        MemoryReporter::new(),
    );
    let mut without_warmup = MeasureSession::new(
        DefaultSuiteConfig::new(10).with_warmup(false),
        MemoryReporter::new(),
    );

    let first = with_warmup.run_full_suite().unwrap();
    let second = without_warmup.run_full_suite().unwrap();

    assert_eq!(first.labels(), second.labels());
}
