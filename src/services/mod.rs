// サービスレイヤー - 設定と報告の具象実装

pub mod config;
pub mod reporting;

pub use config::{DefaultSuiteConfig, DEFAULT_ITERATIONS};
pub use reporting::{ConsoleReporter, MemoryReporter, NoOpReporter};
