// 計測セットアップ専用のカスタムエラー型定義
// 全てのエラーは計測開始前に発生し、実行を中断させる

use crate::core::types::FieldKind;
use thiserror::Error;

/// ディスパッチ計測固有のエラー型
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("メンバー解決エラー: {name} が見つかりません (利用可能: {available})")]
    MemberNotFound { name: String, available: String },

    #[error("フィールド型エラー: {name} - 要求された型 {expected}, 実際の型 {actual}")]
    FieldTypeMismatch {
        name: String,
        expected: FieldKind,
        actual: FieldKind,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("レポート出力エラー: {source}")]
    ReportError {
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    /// メンバー解決エラーの作成
    pub fn member_not_found(name: impl Into<String>, available: &[&str]) -> Self {
        Self::MemberNotFound {
            name: name.into(),
            available: available.join(", "),
        }
    }

    /// フィールド型エラーの作成
    pub fn field_type_mismatch(
        name: impl Into<String>,
        expected: FieldKind,
        actual: FieldKind,
    ) -> Self {
        Self::FieldTypeMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// レポート出力エラーの作成
    pub fn report(source: anyhow::Error) -> Self {
        Self::ReportError { source }
    }

    /// 解決失敗系のエラーかどうかを判定
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound { .. } | Self::FieldTypeMismatch { .. }
        )
    }
}

/// ディスパッチ計測の結果型
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;
