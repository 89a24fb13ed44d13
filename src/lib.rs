//! ディスパッチ戦略のオーバーヘッド計測ツール
//!
//! 同一オブジェクトに対するメソッド呼び出しとプロパティ読み出しを
//! 5つのディスパッチ戦略で繰り返し実行し、経過ミリ秒を比較する：
//! - 直接呼び出し
//! - 名前解決ハンドル経由の動的呼び出し
//! - 対象インスタンスへ束縛したクロージャ呼び出し
//! - 値型でパラメータ化した汎用ゲッターラッパー
//! - 式のコンパイルで得た呼び出し形

pub mod cli;
pub mod core;
pub mod registry;
pub mod runner;
pub mod services;
pub mod specimen;
pub mod strategies;

// 公開API - 主要な型を再エクスポート
pub use crate::core::{
    DispatchError, DispatchResult, FieldKind, FieldValue, SuiteSummary, TimingRecord,
};
pub use crate::registry::MemberRegistry;
pub use crate::runner::MeasureSession;
pub use crate::specimen::Specimen;
