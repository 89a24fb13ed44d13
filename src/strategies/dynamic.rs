//! 動的ルックアップ戦略
//!
//! メンバーを名前で一度だけ解決し、得られた型付きハンドル経由で多数回呼び出す。
//! 読み出しセグメントは1回ごとに`FieldValue`への包み直しを伴う。

use crate::core::{DispatchResult, FieldValue, ResultReporter, TimingRecord};
use crate::registry::MemberRegistry;
use crate::specimen::Specimen;
use std::hint::black_box;
use std::time::Instant;

pub const LABEL_CALL: &str = "動的メソッド呼び出し";
pub const LABEL_READ: &str = "動的プロパティ取得";

/// ハンドル経由の呼び出しをiterations回ずつ計測する
///
/// 名前解決は計測ループの外で行う
pub fn measure<R: ResultReporter>(
    registry: &MemberRegistry,
    specimen: &Specimen,
    payload: &FieldValue,
    iterations: usize,
    reporter: &R,
) -> DispatchResult<Vec<TimingRecord>> {
    let method = registry.method("touch")?;
    let start = Instant::now();
    for _ in 0..iterations {
        method.invoke(black_box(specimen), black_box(payload));
    }
    let call_elapsed = start.elapsed();
    reporter.report_segment(LABEL_CALL, call_elapsed.as_millis());

    let getter = registry.getter("count")?;
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(getter.read(black_box(specimen)));
    }
    let read_elapsed = start.elapsed();
    reporter.report_segment(LABEL_READ, read_elapsed.as_millis());

    Ok(vec![
        TimingRecord::new(LABEL_CALL, call_elapsed, iterations),
        TimingRecord::new(LABEL_READ, read_elapsed, iterations),
    ])
}
