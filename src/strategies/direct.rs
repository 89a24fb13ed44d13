//! 直接呼び出し戦略
//!
//! 静的型付けされた通常のメソッド呼び出しとフィールド読み出しを計測する。
//! 他の戦略のオーバーヘッドを比較するための基準値。

use crate::core::{FieldValue, ResultReporter, TimingRecord};
use crate::specimen::Specimen;
use std::hint::black_box;
use std::time::Instant;

pub const LABEL_CALL: &str = "直接メソッド呼び出し";
pub const LABEL_READ: &str = "直接プロパティ取得";

/// 直接呼び出しをiterations回ずつ計測する
pub fn measure<R: ResultReporter>(
    specimen: &Specimen,
    payload: &FieldValue,
    iterations: usize,
    reporter: &R,
) -> Vec<TimingRecord> {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(specimen).touch(black_box(payload));
    }
    let call_elapsed = start.elapsed();
    reporter.report_segment(LABEL_CALL, call_elapsed.as_millis());

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(black_box(specimen).count());
    }
    let read_elapsed = start.elapsed();
    reporter.report_segment(LABEL_READ, read_elapsed.as_millis());

    vec![
        TimingRecord::new(LABEL_CALL, call_elapsed, iterations),
        TimingRecord::new(LABEL_READ, read_elapsed, iterations),
    ]
}
