// 計測結果報告の具象実装

use crate::core::{FieldValue, ResultReporter};
use std::sync::{Arc, Mutex};

/// コンソール出力による計測結果報告実装
///
/// セグメント行は `<ラベル>: <ミリ秒>` の形式で出力する
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl ResultReporter for ConsoleReporter {
    fn report_started(&self, iterations: usize) {
        if !self.quiet {
            println!("🚀 ディスパッチ戦略ベンチマーク ({iterations} iterations)");
            println!("{}", "=".repeat(60));
        }
    }

    fn report_segment(&self, label: &str, elapsed_ms: u128) {
        if !self.quiet {
            println!("{label}: {elapsed_ms}");
        }
    }

    fn report_value(&self, label: &str, value: &FieldValue) {
        if !self.quiet {
            println!("{label}: {value}");
        }
    }

    fn report_completed(&self, segment_count: usize) {
        if !self.quiet {
            println!("✅ 全{segment_count}セグメントの計測が完了しました");
        }
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ResultReporter for NoOpReporter {
    fn report_started(&self, _iterations: usize) {
        // 何もしない
    }

    fn report_segment(&self, _label: &str, _elapsed_ms: u128) {
        // 何もしない
    }

    fn report_value(&self, _label: &str, _value: &FieldValue) {
        // 何もしない
    }

    fn report_completed(&self, _segment_count: usize) {
        // 何もしない
    }
}

/// 報告内容をメモリに蓄積する実装（テスト用）
///
/// コンソールに出力される行と同じ形式の行を順序どおり保持する
#[derive(Debug, Clone)]
pub struct MemoryReporter {
    lines: Arc<Mutex<Vec<String>>>,
    segments: Arc<Mutex<Vec<(String, u128)>>>,
    values: Arc<Mutex<Vec<(String, String)>>>,
}

impl Default for MemoryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            segments: Arc::new(Mutex::new(Vec::new())),
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// テスト用：報告された行を順序どおり取得
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// テスト用：セグメント報告のみを取得
    pub fn segments(&self) -> Vec<(String, u128)> {
        self.segments.lock().unwrap().clone()
    }

    /// テスト用：セグメントラベルを報告順で取得
    pub fn segment_labels(&self) -> Vec<String> {
        self.segments
            .lock()
            .unwrap()
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// テスト用：値報告のみを取得
    pub fn values(&self) -> Vec<(String, String)> {
        self.values.lock().unwrap().clone()
    }

    /// テスト用：蓄積内容をクリア
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
        self.segments.lock().unwrap().clear();
        self.values.lock().unwrap().clear();
    }
}

impl ResultReporter for MemoryReporter {
    fn report_started(&self, iterations: usize) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("started: {iterations}"));
    }

    fn report_segment(&self, label: &str, elapsed_ms: u128) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{label}: {elapsed_ms}"));
        self.segments
            .lock()
            .unwrap()
            .push((label.to_string(), elapsed_ms));
    }

    fn report_value(&self, label: &str, value: &FieldValue) {
        self.lines.lock().unwrap().push(format!("{label}: {value}"));
        self.values
            .lock()
            .unwrap()
            .push((label.to_string(), value.to_string()));
    }

    fn report_completed(&self, segment_count: usize) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("completed: {segment_count}"));
    }
}
