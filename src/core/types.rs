// 計測に関連するデータ型定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// フィールド値の動的表現
///
/// 名前解決経由の読み出しはこの型で値を受け渡す。
/// メソッドへ渡す任意の引数値としても使用し、
/// 内容を持たない引数は`Empty`で表す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Empty,
}

impl FieldValue {
    /// 値の型種別を取得（Emptyには種別がない）
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Int(_) => Some(FieldKind::Int),
            Self::Text(_) => Some(FieldKind::Text),
            Self::Timestamp(_) => Some(FieldKind::Timestamp),
            Self::Empty => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
            Self::Timestamp(value) => write!(f, "{}", value.to_rfc3339()),
            Self::Empty => write!(f, "-"),
        }
    }
}

/// フィールドの型種別
///
/// 解決失敗時の診断メッセージで使用する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Int,
    Text,
    Timestamp,
}

impl FieldKind {
    /// 型種別の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "i64",
            Self::Text => "String",
            Self::Timestamp => "DateTime<Utc>",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1セグメント分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    pub label: String,
    pub elapsed: Duration,
    pub iterations: usize,
}

impl TimingRecord {
    pub fn new(label: impl Into<String>, elapsed: Duration, iterations: usize) -> Self {
        Self {
            label: label.into(),
            elapsed,
            iterations,
        }
    }

    /// 経過時間をミリ秒で取得
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// スイート全体のサマリー
///
/// JSONレポートとしてそのままシリアライズされる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub generated_at: DateTime<Utc>,
    pub iterations: usize,
    pub records: Vec<TimingRecord>,
}

impl SuiteSummary {
    /// 計測済みセグメント数を取得
    pub fn segment_count(&self) -> usize {
        self.records.len()
    }

    /// ラベル一覧を記録順で取得
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }
}
