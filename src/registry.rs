//! 名前によるメンバー解決
//!
//! メソッドとゲッターを名前で引き、関数ポインタを包んだ型付きハンドルとして返す。
//! 解決は必ず計測ループの外で一度だけ行う（一度解決して多数回呼び出す構造）。

use crate::core::{DispatchError, DispatchResult, FieldKind, FieldValue};
use crate::specimen::Specimen;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// メソッド呼び出し用の型付きハンドル
#[derive(Debug, Clone, Copy)]
pub struct MethodHandle {
    invoke: fn(&Specimen, &FieldValue),
}

impl MethodHandle {
    /// 解決済みメソッドを対象インスタンスに対して呼び出す
    pub fn invoke(&self, target: &Specimen, payload: &FieldValue) {
        (self.invoke)(target, payload)
    }
}

/// ゲッター用の型付きハンドル
///
/// フィールドの値型ごとに関数ポインタを保持する
#[derive(Debug, Clone, Copy)]
pub enum GetterHandle {
    Int(fn(&Specimen) -> i64),
    Text(fn(&Specimen) -> String),
    Timestamp(fn(&Specimen) -> DateTime<Utc>),
}

impl GetterHandle {
    /// 動的型付きでフィールド値を読み出す
    pub fn read(&self, target: &Specimen) -> FieldValue {
        match self {
            Self::Int(read) => FieldValue::Int(read(target)),
            Self::Text(read) => FieldValue::Text(read(target)),
            Self::Timestamp(read) => FieldValue::Timestamp(read(target)),
        }
    }

    /// フィールドの型種別を取得
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Int,
            Self::Text(_) => FieldKind::Text,
            Self::Timestamp(_) => FieldKind::Timestamp,
        }
    }
}

/// メンバーレジストリ - 名前から型付きハンドルへの対応表
#[derive(Debug)]
pub struct MemberRegistry {
    methods: HashMap<&'static str, MethodHandle>,
    getters: HashMap<&'static str, GetterHandle>,
}

impl MemberRegistry {
    /// Specimenの全メンバーを登録したレジストリを作成
    pub fn new() -> Self {
        let mut methods = HashMap::new();
        methods.insert(
            "touch",
            MethodHandle {
                invoke: Specimen::touch,
            },
        );

        let mut getters = HashMap::new();
        getters.insert("count", GetterHandle::Int(Specimen::count));
        getters.insert("label", GetterHandle::Text(Specimen::label));
        getters.insert("created_at", GetterHandle::Timestamp(Specimen::created_at));

        Self { methods, getters }
    }

    /// メソッドを名前で解決
    pub fn method(&self, name: &str) -> DispatchResult<MethodHandle> {
        self.methods.get(name).copied().ok_or_else(|| {
            DispatchError::member_not_found(name, &self.method_names())
        })
    }

    /// ゲッターを名前で解決
    pub fn getter(&self, name: &str) -> DispatchResult<GetterHandle> {
        self.getters.get(name).copied().ok_or_else(|| {
            DispatchError::member_not_found(name, &self.getter_names())
        })
    }

    /// 登録済みメソッド名の一覧（ソート済み）
    pub fn method_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.methods.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// 登録済みゲッター名の一覧（ソート済み）
    pub fn getter_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.getters.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for MemberRegistry {
    fn default() -> Self {
        Self::new()
    }
}
