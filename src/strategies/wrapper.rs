//! 汎用ゲッターラッパー戦略
//!
//! 束縛済みゲッタークロージャを、フィールドの値型でパラメータ化した
//! 最小限のコンテナに包んで計測する。
//! 整数フィールドと文字列フィールドの両方を読み出し、
//! 最後に解決した値を整合性チェックとして報告する。

use crate::core::{DispatchError, DispatchResult, FieldKind, FieldValue, ResultReporter, TimingRecord};
use crate::registry::{GetterHandle, MemberRegistry};
use crate::specimen::Specimen;
use chrono::{DateTime, Utc};
use std::hint::black_box;
use std::time::Instant;

pub const LABEL_VALUE: &str = "プロパティの値";
pub const LABEL_READ_INT: &str = "汎用ラッパープロパティ取得(i64)";
pub const LABEL_READ_TEXT: &str = "汎用ラッパープロパティ取得(String)";

/// ゲッターハンドルから型付き読み出しへの射影を提供するトレイト
///
/// フィールドの値型ごとに実装し、種別が一致しない場合はNoneを返す
pub trait TypedField: Sized {
    /// このRust型に対応するフィールド種別
    const KIND: FieldKind;

    /// ハンドルから型付きの読み出し関数を取り出す
    fn projector(handle: GetterHandle) -> Option<fn(&Specimen) -> Self>;
}

impl TypedField for i64 {
    const KIND: FieldKind = FieldKind::Int;

    fn projector(handle: GetterHandle) -> Option<fn(&Specimen) -> Self> {
        match handle {
            GetterHandle::Int(read) => Some(read),
            _ => None,
        }
    }
}

impl TypedField for String {
    const KIND: FieldKind = FieldKind::Text;

    fn projector(handle: GetterHandle) -> Option<fn(&Specimen) -> Self> {
        match handle {
            GetterHandle::Text(read) => Some(read),
            _ => None,
        }
    }
}

impl TypedField for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn projector(handle: GetterHandle) -> Option<fn(&Specimen) -> Self> {
        match handle {
            GetterHandle::Timestamp(read) => Some(read),
            _ => None,
        }
    }
}

/// 束縛ゲッターを値型でパラメータ化して包む汎用コンテナ
pub struct GetterWrapper<'a, T> {
    getter: Box<dyn Fn() -> T + 'a>,
}

impl<'a, T> std::fmt::Debug for GetterWrapper<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetterWrapper").finish()
    }
}

impl<'a, T: TypedField + 'a> GetterWrapper<'a, T> {
    /// レジストリでゲッターを解決し、対象インスタンスへ束縛して包む
    pub fn bind(
        registry: &MemberRegistry,
        name: &str,
        target: &'a Specimen,
    ) -> DispatchResult<Self> {
        let handle = registry.getter(name)?;
        let read = T::projector(handle).ok_or_else(|| {
            DispatchError::field_type_mismatch(name, T::KIND, handle.kind())
        })?;

        Ok(Self {
            getter: Box::new(move || read(target)),
        })
    }

    /// 束縛済みゲッターから値を読み出す
    pub fn value(&self) -> T {
        (self.getter)()
    }
}

/// 整数・文字列フィールドをラッパー経由でiterations回ずつ読み出す
///
/// この戦略は自前のSpecimen(count=999)を構築し、
/// 文字列セグメントの前にlabelへ"test"を設定する
pub fn measure<R: ResultReporter>(
    registry: &MemberRegistry,
    iterations: usize,
    reporter: &R,
) -> DispatchResult<Vec<TimingRecord>> {
    let mut specimen = Specimen::new(999);

    let (int_elapsed, final_count) = {
        let wrapper = GetterWrapper::<i64>::bind(registry, "count", &specimen)?;
        let start = Instant::now();
        let mut value = 0i64;
        for _ in 0..iterations {
            value = black_box(wrapper.value());
        }
        (start.elapsed(), value)
    };
    reporter.report_value(LABEL_VALUE, &FieldValue::Int(final_count));
    reporter.report_segment(LABEL_READ_INT, int_elapsed.as_millis());

    specimen.set_label("test");

    let (text_elapsed, final_label) = {
        let wrapper = GetterWrapper::<String>::bind(registry, "label", &specimen)?;
        let start = Instant::now();
        let mut value = String::new();
        for _ in 0..iterations {
            value = black_box(wrapper.value());
        }
        (start.elapsed(), value)
    };
    reporter.report_value(LABEL_VALUE, &FieldValue::Text(final_label));
    reporter.report_segment(LABEL_READ_TEXT, text_elapsed.as_millis());

    Ok(vec![
        TimingRecord::new(LABEL_READ_INT, int_elapsed, iterations),
        TimingRecord::new(LABEL_READ_TEXT, text_elapsed, iterations),
    ])
}
