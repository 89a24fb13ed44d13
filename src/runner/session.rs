//! 計測セッション - 5つのディスパッチ戦略を固定順で実行するオーケストレーター

use crate::core::{
    DispatchError, DispatchResult, FieldValue, ResultReporter, SuiteConfig, SuiteSummary,
    TimingRecord,
};
use crate::registry::MemberRegistry;
use crate::specimen::Specimen;
use crate::strategies;
use chrono::Utc;
use std::path::Path;

/// 計測セッション
///
/// 設定と報告先を型パラメータで注入する
pub struct MeasureSession<C, R>
where
    C: SuiteConfig,
    R: ResultReporter,
{
    config: C,
    reporter: R,
    records: Vec<TimingRecord>,
}

impl<C, R> MeasureSession<C, R>
where
    C: SuiteConfig,
    R: ResultReporter,
{
    pub fn new(config: C, reporter: R) -> Self {
        Self {
            config,
            reporter,
            records: Vec::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// これまでに集計した計測結果
    pub fn records(&self) -> &[TimingRecord] {
        &self.records
    }

    /// 5つのディスパッチ戦略を固定順で実行する
    ///
    /// 順序: 直接 → 動的 → 束縛クロージャ → 汎用ラッパー → 式コンパイル
    pub fn run_full_suite(&mut self) -> DispatchResult<SuiteSummary> {
        let iterations = self.config.iterations();
        if iterations == 0 {
            return Err(DispatchError::configuration(
                "反復回数は1以上である必要があります",
            ));
        }

        let registry = MemberRegistry::new();
        let specimen = Specimen::new(1);
        let payload = FieldValue::Empty;

        self.reporter.report_started(iterations);

        // 初回呼び出しの一時的なコストを計測対象から外すためのウォームアップ
        if self.config.warmup_enabled() {
            specimen.touch(&payload);
        }

        let mut records = Vec::new();
        records.extend(strategies::direct::measure(
            &specimen,
            &payload,
            iterations,
            &self.reporter,
        ));
        records.extend(strategies::dynamic::measure(
            &registry,
            &specimen,
            &payload,
            iterations,
            &self.reporter,
        )?);
        records.extend(strategies::bound::measure(
            &registry,
            &specimen,
            &payload,
            iterations,
            &self.reporter,
        )?);
        records.extend(strategies::wrapper::measure(
            &registry,
            iterations,
            &self.reporter,
        )?);
        records.extend(strategies::expression::measure(
            &registry,
            &specimen,
            &payload,
            iterations,
            &self.reporter,
        )?);

        self.reporter.report_completed(records.len());

        let summary = SuiteSummary {
            generated_at: Utc::now(),
            iterations,
            records: records.clone(),
        };
        self.records.extend(records);

        Ok(summary)
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &Path) -> DispatchResult<()> {
        let summary = SuiteSummary {
            generated_at: Utc::now(),
            iterations: self.config.iterations(),
            records: self.records.clone(),
        };

        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| DispatchError::report(anyhow::Error::new(e)))?;
        std::fs::write(path, json).map_err(|e| DispatchError::report(anyhow::Error::new(e)))?;

        println!("📄 詳細レポートを出力しました: {}", path.display());
        Ok(())
    }
}
