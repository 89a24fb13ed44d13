//! 束縛クロージャ戦略
//!
//! 解決済みハンドルと対象インスタンスからクロージャを一度だけ構築し、
//! 呼び出し時の対象・メンバー解決コストを排除する。

use crate::core::{DispatchError, DispatchResult, FieldKind, FieldValue, ResultReporter, TimingRecord};
use crate::registry::{GetterHandle, MemberRegistry};
use crate::specimen::Specimen;
use std::hint::black_box;
use std::time::Instant;

pub const LABEL_CALL: &str = "束縛クロージャメソッド呼び出し";
pub const LABEL_READ: &str = "束縛クロージャプロパティ取得";

/// メソッドを解決し、対象インスタンスへ束縛したクロージャを返す
pub fn bind_method<'a>(
    registry: &MemberRegistry,
    name: &str,
    target: &'a Specimen,
) -> DispatchResult<impl Fn(&FieldValue) + 'a> {
    let handle = registry.method(name)?;
    Ok(move |payload: &FieldValue| handle.invoke(target, payload))
}

/// 整数ゲッターを解決し、対象インスタンスへ束縛したクロージャを返す
///
/// 別の型のフィールドを指定した場合はセットアップエラー
pub fn bind_int_getter<'a>(
    registry: &MemberRegistry,
    name: &str,
    target: &'a Specimen,
) -> DispatchResult<impl Fn() -> i64 + 'a> {
    match registry.getter(name)? {
        GetterHandle::Int(read) => Ok(move || read(target)),
        other => Err(DispatchError::field_type_mismatch(
            name,
            FieldKind::Int,
            other.kind(),
        )),
    }
}

/// 文字列ゲッターを解決し、対象インスタンスへ束縛したクロージャを返す
pub fn bind_text_getter<'a>(
    registry: &MemberRegistry,
    name: &str,
    target: &'a Specimen,
) -> DispatchResult<impl Fn() -> String + 'a> {
    match registry.getter(name)? {
        GetterHandle::Text(read) => Ok(move || read(target)),
        other => Err(DispatchError::field_type_mismatch(
            name,
            FieldKind::Text,
            other.kind(),
        )),
    }
}

/// 束縛クロージャ経由の呼び出しをiterations回ずつ計測する
///
/// 束縛は計測ループの外で行う
pub fn measure<R: ResultReporter>(
    registry: &MemberRegistry,
    specimen: &Specimen,
    payload: &FieldValue,
    iterations: usize,
    reporter: &R,
) -> DispatchResult<Vec<TimingRecord>> {
    let invoke = bind_method(registry, "touch", specimen)?;
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(&invoke)(black_box(payload));
    }
    let call_elapsed = start.elapsed();
    reporter.report_segment(LABEL_CALL, call_elapsed.as_millis());

    let read_count = bind_int_getter(registry, "count", specimen)?;
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(read_count());
    }
    let read_elapsed = start.elapsed();
    reporter.report_segment(LABEL_READ, read_elapsed.as_millis());

    Ok(vec![
        TimingRecord::new(LABEL_CALL, call_elapsed, iterations),
        TimingRecord::new(LABEL_READ, read_elapsed, iterations),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::NoOpReporter;

    #[test]
    fn test_bind_method_and_invoke() {
        let registry = MemberRegistry::new();
        let specimen = Specimen::new(1);

        let invoke = bind_method(&registry, "touch", &specimen).unwrap();
        invoke(&FieldValue::Empty);

        assert_eq!(specimen.count(), 1);
    }

    #[test]
    fn test_bind_int_getter() {
        let registry = MemberRegistry::new();
        let specimen = Specimen::new(999);

        let read = bind_int_getter(&registry, "count", &specimen).unwrap();

        assert_eq!(read(), 999);
    }

    #[test]
    fn test_bind_text_getter() {
        let registry = MemberRegistry::new();
        let mut specimen = Specimen::new(1);
        specimen.set_label("test");

        let read = bind_text_getter(&registry, "label", &specimen).unwrap();

        assert_eq!(read(), "test");
    }

    #[test]
    fn test_bind_int_getter_type_mismatch() {
        let registry = MemberRegistry::new();
        let specimen = Specimen::new(1);

        let error = bind_int_getter(&registry, "label", &specimen).err().unwrap();

        assert!(error.to_string().contains("フィールド型エラー"));
        assert!(error.to_string().contains("label"));
    }

    #[test]
    fn test_bind_unknown_member_fails() {
        let registry = MemberRegistry::new();
        let specimen = Specimen::new(1);

        assert!(bind_method(&registry, "missing", &specimen).is_err());
        assert!(bind_int_getter(&registry, "missing", &specimen).is_err());
    }

    #[test]
    fn test_measure_returns_two_records() {
        let registry = MemberRegistry::new();
        let specimen = Specimen::new(1);

        let records = measure(
            &registry,
            &specimen,
            &FieldValue::Empty,
            10,
            &NoOpReporter::new(),
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, LABEL_CALL);
        assert_eq!(records[1].label, LABEL_READ);
        assert_eq!(specimen.count(), 1);
    }
}
