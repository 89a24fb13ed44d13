// スイート全体のエンドツーエンドテスト

use dispatch_lab::core::SuiteSummary;
use dispatch_lab::runner::MeasureSession;
use dispatch_lab::services::{DefaultSuiteConfig, MemoryReporter};
use dispatch_lab::strategies::wrapper;

#[test]
fn test_full_suite_produces_all_segments() {
    let config = DefaultSuiteConfig::new(100);
    let reporter = MemoryReporter::new();
    let mut session = MeasureSession::new(config, reporter);

    let summary = session.run_full_suite().unwrap();

    // 5戦略 x 2セグメント = 10レコード
    assert_eq!(summary.segment_count(), 10);
    assert_eq!(summary.iterations, 100);

    // 各レコードは設定どおりの反復回数を持つ
    assert!(summary.records.iter().all(|r| r.iterations == 100));

    // 経過時間は非負（ミリ秒表現が取得できること）
    for record in &summary.records {
        let _ms = record.elapsed_ms();
    }

    // セグメント報告はレコードと同じ順序
    let reported = session.reporter().segment_labels();
    assert_eq!(
        reported,
        summary
            .labels()
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_full_suite_integrity_values() {
    // 汎用ラッパー戦略の整合性チェック：整数999、文字列"test"
    let mut session = MeasureSession::new(DefaultSuiteConfig::new(50), MemoryReporter::new());
    session.run_full_suite().unwrap();

    let values = session.reporter().values();
    assert_eq!(
        values,
        vec![
            (wrapper::LABEL_VALUE.to_string(), "999".to_string()),
            (wrapper::LABEL_VALUE.to_string(), "test".to_string()),
        ]
    );

    // 値の行はそれぞれのタイミング行の直前に出力される
    let lines = session.reporter().lines();
    let int_value_pos = lines
        .iter()
        .position(|l| l == &format!("{}: 999", wrapper::LABEL_VALUE))
        .unwrap();
    assert!(lines[int_value_pos + 1].starts_with(wrapper::LABEL_READ_INT));

    let text_value_pos = lines
        .iter()
        .position(|l| l == &format!("{}: test", wrapper::LABEL_VALUE))
        .unwrap();
    assert!(lines[text_value_pos + 1].starts_with(wrapper::LABEL_READ_TEXT));
}

#[test]
fn test_json_report_roundtrip() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let report_path = temp_dir.path().join("report.json");

    let mut session = MeasureSession::new(DefaultSuiteConfig::new(20), MemoryReporter::new());
    let summary = session.run_full_suite().unwrap();
    session.export_json_report(&report_path).unwrap();

    let json = std::fs::read_to_string(&report_path).unwrap();
    let exported: SuiteSummary = serde_json::from_str(&json).unwrap();

    assert_eq!(exported.iterations, 20);
    assert_eq!(exported.labels(), summary.labels());
}
