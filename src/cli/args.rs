use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch_lab")]
#[command(about = "Measure the overhead of method and property dispatch strategies")]
#[command(version)]
pub struct Cli {
    /// Number of loop passes per measured segment
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Write a JSON report of all measured segments to this path
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Suppress console output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["dispatch_lab"]);

        assert!(cli.iterations.is_none());
        assert!(cli.report.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "dispatch_lab",
            "--iterations",
            "1000",
            "--report",
            "timings.json",
            "--quiet",
        ]);

        assert_eq!(cli.iterations, Some(1000));
        assert_eq!(cli.report, Some(PathBuf::from("timings.json")));
        assert!(cli.quiet);
    }
}
