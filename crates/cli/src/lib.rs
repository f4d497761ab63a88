use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::commands::{CompareArgs, handle_compare};
use crate::options::FormatOptions;

pub mod commands;
pub mod options;
pub mod render;

#[derive(Parser, Debug)]
#[command(
    name = "depdrift",
    author,
    version,
    about = "Compare dependency versions across Gradle build files",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    /// Build files to compare (at least two)
    files: Vec<PathBuf>,

    #[arg(short, long)]
    format: Option<FormatOptions>,
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    handle_compare(&CompareArgs {
        files: cli.files,
        format: cli.format,
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_files() {
        let cli = Cli::parse_from(["depdrift", "a/build.gradle", "b/build.gradle"]);
        assert_eq!(
            cli.files,
            vec![
                PathBuf::from("a/build.gradle"),
                PathBuf::from("b/build.gradle")
            ]
        );
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_cli_parsing_no_files() {
        let cli = Cli::parse_from(["depdrift"]);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_cli_parsing_format_json() {
        let cli = Cli::parse_from(["depdrift", "--format", "json", "a.gradle", "b.gradle"]);
        assert!(matches!(cli.format, Some(FormatOptions::Json)));
    }

    #[test]
    fn test_cli_parsing_format_short() {
        let cli = Cli::parse_from(["depdrift", "-f", "stdout", "a.gradle", "b.gradle"]);
        assert!(matches!(cli.format, Some(FormatOptions::Stdout)));
    }
}
