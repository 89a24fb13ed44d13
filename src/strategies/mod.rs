// ディスパッチ戦略ごとの計測実装
// 各戦略は「一度構築し、多数回呼び出す」構造と
// メソッド・プロパティ2セグメントの報告形式を共有する

pub mod bound;
pub mod direct;
pub mod dynamic;
pub mod expression;
pub mod wrapper;

pub use expression::{CallExpr, CompiledCall, CompiledRead, ReadExpr};
pub use wrapper::{GetterWrapper, TypedField};
