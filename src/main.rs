use anyhow::Result;
use clap::Parser;

use dispatch_lab::{
    cli::Cli,
    runner::MeasureSession,
    services::{ConsoleReporter, DefaultSuiteConfig},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. スイート設定の組み立て
    let mut config = DefaultSuiteConfig::default();
    if let Some(iterations) = cli.iterations {
        config = config.with_iterations(iterations);
    }

    let reporter = if cli.quiet {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::new()
    };

    // 2. 5戦略を固定順で実行
    let mut session = MeasureSession::new(config, reporter);
    session.run_full_suite()?;

    // 3. 要求があればJSONレポートを出力
    if let Some(path) = cli.report.as_deref() {
        session.export_json_report(path)?;
    }

    Ok(())
}
