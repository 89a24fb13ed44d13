//! 計測対象となる固定オブジェクト
//!
//! 整数・文字列・タイムスタンプの3フィールドを持ち、
//! それぞれにゲッター/セッターを提供する。
//! `touch`は呼び出しコストのみを計測するための何もしないメソッド。

use crate::core::FieldValue;
use chrono::{DateTime, Utc};

/// 計測対象オブジェクト
#[derive(Debug, Clone)]
pub struct Specimen {
    count: i64,
    label: String,
    created_at: DateTime<Utc>,
}

impl Specimen {
    /// 整数フィールドを指定して作成
    ///
    /// 文字列フィールドは空、タイムスタンプは作成時刻で初期化される
    pub fn new(count: i64) -> Self {
        Self {
            count,
            label: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn set_count(&mut self, count: i64) {
        self.count = count;
    }

    pub fn label(&self) -> String {
        self.label.clone()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    /// 何もしないメソッド
    ///
    /// 引数は受け取るが一切使用せず、状態も変更しない
    pub fn touch(&self, _payload: &FieldValue) {}
}
