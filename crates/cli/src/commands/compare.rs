use std::path::PathBuf;

use anyhow::Result;
use depdrift_core::{Extractor, compare};
use depdrift_gradle::GradleExtractor;

use crate::options::FormatOptions;
use crate::render::render_report;

#[derive(Debug)]
pub struct CompareArgs {
    pub files: Vec<PathBuf>,
    pub format: Option<FormatOptions>,
}

/// Compare dependency versions across the given build files.
///
/// Every file is attempted even after a failure so that all unreadable paths
/// are reported in one pass; any failure aborts the run before a report is
/// produced, since positional file alignment requires every index.
pub async fn handle_compare(args: &CompareArgs) -> Result<()> {
    if args.files.len() < 2 {
        anyhow::bail!("at least two build files are required: depdrift <file1> <file2> [<file3>...]");
    }

    let extractor = GradleExtractor::new();
    let mut indexes = Vec::with_capacity(args.files.len());
    let mut failed = 0usize;
    for path in &args.files {
        match extractor.extract(path).await {
            Ok(index) => indexes.push(index),
            Err(e) => {
                eprintln!("Error: {e}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} input file(s) could not be read", args.files.len());
    }

    let report = compare(&indexes);
    match args.format.as_ref().unwrap_or(&FormatOptions::Stdout) {
        FormatOptions::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        FormatOptions::Stdout => print!("{}", render_report(&report)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write_gradle(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_fewer_than_two_files_is_an_error() {
        let result = handle_compare(&CompareArgs {
            files: vec![PathBuf::from("only.gradle")],
            format: None,
        })
        .await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("at least two build files")
        );
    }

    #[tokio::test]
    async fn test_no_files_is_an_error() {
        let result = handle_compare(&CompareArgs {
            files: Vec::new(),
            format: None,
        })
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_fails_the_run() {
        let temp_dir = TempDir::new().unwrap();
        let present = write_gradle(
            &temp_dir,
            "build.gradle",
            "compile group:'org.a',name:'lib',version:'1.0'\n",
        )
        .await;
        let missing = temp_dir.path().join("absent.gradle");

        let result = handle_compare(&CompareArgs {
            files: vec![present, missing],
            format: None,
        })
        .await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("1 of 2"));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_all_files_missing_counts_every_failure() {
        let temp_dir = TempDir::new().unwrap();
        let result = handle_compare(&CompareArgs {
            files: vec![
                temp_dir.path().join("a.gradle"),
                temp_dir.path().join("b.gradle"),
            ],
            format: None,
        })
        .await;
        assert!(result.unwrap_err().to_string().contains("2 of 2"));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_compare_succeeds_with_divergences() {
        let temp_dir = TempDir::new().unwrap();
        let file1 = write_gradle(
            &temp_dir,
            "a.gradle",
            "compile group:'org.a',name:'lib',version:'1.0'\n",
        )
        .await;
        let file2 = write_gradle(
            &temp_dir,
            "b.gradle",
            "compile group:'org.a',name:'lib',version:'2.0'\n",
        )
        .await;

        let result = handle_compare(&CompareArgs {
            files: vec![file1, file2],
            format: None,
        })
        .await;
        assert!(result.is_ok());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_compare_json_format() {
        let temp_dir = TempDir::new().unwrap();
        let file1 = write_gradle(
            &temp_dir,
            "a.gradle",
            "compile group:'org.a',name:'lib',version:'1.0'\n",
        )
        .await;
        let file2 = write_gradle(
            &temp_dir,
            "b.gradle",
            "compile group:'org.a',name:'lib',version:'1.0'\n",
        )
        .await;

        let result = handle_compare(&CompareArgs {
            files: vec![file1, file2],
            format: Some(FormatOptions::Json),
        })
        .await;
        assert!(result.is_ok());

        temp_dir.close().unwrap();
    }
}
