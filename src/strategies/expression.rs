//! 式コンパイル戦略
//!
//! 「このメソッドを呼ぶ」「このプロパティを読む」を表す小さな式を
//! 一度だけ呼び出し可能な形にコンパイルし、呼び出しのみを計測する。
//! コンパイル結果は対象インスタンスに束縛されない呼び出し形で、
//! 呼び出し時に対象（と引数）を受け取る。

use crate::core::{DispatchError, DispatchResult, FieldValue, ResultReporter, TimingRecord};
use crate::registry::MemberRegistry;
use crate::specimen::Specimen;
use crate::strategies::wrapper::TypedField;
use std::hint::black_box;
use std::time::Instant;

pub const LABEL_CALL: &str = "式コンパイルメソッド呼び出し";
pub const LABEL_READ: &str = "式コンパイルプロパティ取得";

/// メソッド呼び出しを表す式
#[derive(Debug, Clone)]
pub struct CallExpr {
    method: String,
}

impl CallExpr {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    /// レジストリで解決し、呼び出し可能な形へコンパイルする
    pub fn compile(&self, registry: &MemberRegistry) -> DispatchResult<CompiledCall> {
        let handle = registry.method(&self.method)?;
        Ok(CompiledCall {
            invoke: Box::new(move |target, payload| handle.invoke(target, payload)),
        })
    }
}

/// コンパイル済みメソッド呼び出し
pub struct CompiledCall {
    invoke: Box<dyn Fn(&Specimen, &FieldValue)>,
}

impl std::fmt::Debug for CompiledCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledCall").finish()
    }
}

impl CompiledCall {
    pub fn invoke(&self, target: &Specimen, payload: &FieldValue) {
        (self.invoke)(target, payload)
    }
}

/// プロパティ読み出しを表す式
#[derive(Debug, Clone)]
pub struct ReadExpr {
    property: String,
}

impl ReadExpr {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }

    /// レジストリで解決し、型付きの読み出し形へコンパイルする
    pub fn compile<T: TypedField + 'static>(
        &self,
        registry: &MemberRegistry,
    ) -> DispatchResult<CompiledRead<T>> {
        let handle = registry.getter(&self.property)?;
        let read = T::projector(handle).ok_or_else(|| {
            DispatchError::field_type_mismatch(&self.property, T::KIND, handle.kind())
        })?;

        Ok(CompiledRead {
            read: Box::new(move |target| read(target)),
        })
    }
}

/// コンパイル済みプロパティ読み出し
pub struct CompiledRead<T> {
    read: Box<dyn Fn(&Specimen) -> T>,
}

impl<T> std::fmt::Debug for CompiledRead<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledRead").finish()
    }
}

impl<T> CompiledRead<T> {
    pub fn invoke(&self, target: &Specimen) -> T {
        (self.read)(target)
    }
}

/// コンパイル済みの呼び出し形をiterations回ずつ計測する
///
/// コンパイルは計測ループの外で行い、各セグメントは新しいタイマーで計測する
pub fn measure<R: ResultReporter>(
    registry: &MemberRegistry,
    specimen: &Specimen,
    payload: &FieldValue,
    iterations: usize,
    reporter: &R,
) -> DispatchResult<Vec<TimingRecord>> {
    let call = CallExpr::new("touch").compile(registry)?;
    let start = Instant::now();
    for _ in 0..iterations {
        call.invoke(black_box(specimen), black_box(payload));
    }
    let call_elapsed = start.elapsed();
    reporter.report_segment(LABEL_CALL, call_elapsed.as_millis());

    let read = ReadExpr::new("count").compile::<i64>(registry)?;
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(read.invoke(black_box(specimen)));
    }
    let read_elapsed = start.elapsed();
    reporter.report_segment(LABEL_READ, read_elapsed.as_millis());

    Ok(vec![
        TimingRecord::new(LABEL_CALL, call_elapsed, iterations),
        TimingRecord::new(LABEL_READ, read_elapsed, iterations),
    ])
}
