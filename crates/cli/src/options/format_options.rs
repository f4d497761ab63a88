use clap::ValueEnum;

/// CLI output format selection.
///
/// Controls whether the comparison report is printed as human-readable text
/// or as JSON for CI integration.
#[derive(Debug, Clone, ValueEnum)]
pub enum FormatOptions {
    /// JSON report for CI/CD pipelines
    #[value(name = "json")]
    Json,
    /// Human-readable colored terminal output
    #[value(name = "stdout")]
    Stdout,
}
