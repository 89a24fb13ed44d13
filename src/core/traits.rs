// ディスパッチ計測システムのトレイト定義
// 全ての抽象化インターフェースを定義

use crate::core::types::FieldValue;
use mockall::automock;

/// 計測スイートの設定を抽象化するトレイト
#[automock]
pub trait SuiteConfig: Send + Sync {
    /// 各セグメントの反復回数を取得
    fn iterations(&self) -> usize;

    /// 計測前にウォームアップ呼び出しを行うかどうか
    fn warmup_enabled(&self) -> bool;
}

// SuiteConfig for Box<dyn SuiteConfig>
impl SuiteConfig for Box<dyn SuiteConfig> {
    fn iterations(&self) -> usize {
        self.as_ref().iterations()
    }

    fn warmup_enabled(&self) -> bool {
        self.as_ref().warmup_enabled()
    }
}

/// 計測結果報告の抽象化トレイト
#[automock]
pub trait ResultReporter: Send + Sync {
    /// スイート開始時の報告
    fn report_started(&self, iterations: usize);

    /// 計測済みセグメントの報告
    fn report_segment(&self, label: &str, elapsed_ms: u128);

    /// 整合性チェック用の値報告
    fn report_value(&self, label: &str, value: &FieldValue);

    /// スイート完了時の報告
    fn report_completed(&self, segment_count: usize);
}

// ResultReporter for Box<dyn ResultReporter>
impl ResultReporter for Box<dyn ResultReporter> {
    fn report_started(&self, iterations: usize) {
        self.as_ref().report_started(iterations)
    }

    fn report_segment(&self, label: &str, elapsed_ms: u128) {
        self.as_ref().report_segment(label, elapsed_ms)
    }

    fn report_value(&self, label: &str, value: &FieldValue) {
        self.as_ref().report_value(label, value)
    }

    fn report_completed(&self, segment_count: usize) {
        self.as_ref().report_completed(segment_count)
    }
}
