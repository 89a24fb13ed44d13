// セットアップエラー経路の統合テスト

use dispatch_lab::registry::MemberRegistry;
use dispatch_lab::runner::MeasureSession;
use dispatch_lab::services::{DefaultSuiteConfig, NoOpReporter};
use dispatch_lab::specimen::Specimen;
use dispatch_lab::strategies::{bound, CallExpr, GetterWrapper, ReadExpr};

#[test]
fn test_unknown_member_aborts_with_diagnostic() {
    let registry = MemberRegistry::new();

    let error = registry.method("cal").unwrap_err();
    let message = error.to_string();

    // 見つからなかった名前と登録済みの名前の両方が含まれる
    assert!(message.contains("cal"));
    assert!(message.contains("touch"));
}

#[test]
fn test_typed_bind_against_wrong_field_kind() {
    let registry = MemberRegistry::new();
    let specimen = Specimen::new(1);

    let error = bound::bind_text_getter(&registry, "count", &specimen).err().unwrap();
    let message = error.to_string();

    assert!(message.contains("count"));
    assert!(message.contains("String"));
    assert!(message.contains("i64"));
}

#[test]
fn test_wrapper_bind_against_wrong_field_kind() {
    let registry = MemberRegistry::new();
    let specimen = Specimen::new(1);

    let error = GetterWrapper::<String>::bind(&registry, "created_at", &specimen).err().unwrap();

    assert!(error.to_string().contains("created_at"));
    assert!(error.to_string().contains("DateTime<Utc>"));
}

#[test]
fn test_expression_compile_failures() {
    let registry = MemberRegistry::new();

    assert!(CallExpr::new("missing").compile(&registry).is_err());
    assert!(ReadExpr::new("missing").compile::<i64>(&registry).is_err());
    assert!(ReadExpr::new("label").compile::<i64>(&registry).is_err());
}

#[test]
fn test_zero_iterations_rejected_before_measurement() {
    let mut session = MeasureSession::new(DefaultSuiteConfig::new(0), NoOpReporter::new());

    let error = session.run_full_suite().unwrap_err();

    assert!(error.to_string().contains("設定エラー"));
    assert!(session.records().is_empty());
}
