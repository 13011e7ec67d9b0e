//! End-to-end pipeline tests using `cat` as the text converter.

#![cfg(unix)]

use std::fs;
use std::sync::Arc;

use coopex_core::{
    discover, finalize, ApplicantParser, CommandExtractor, CoopexConfig, CoopexError,
    ExtractionRuleSet, FilenamePattern, WorkerPool,
};
use pretty_assertions::assert_eq;

async fn run_dir(dir: &std::path::Path, config: &CoopexConfig) -> coopex_core::Result<String> {
    let pattern = FilenamePattern::new(&config.dispatch.file_pattern)?;
    let rules = Arc::new(ExtractionRuleSet::from_config(&config.rules)?);

    let candidates = discover(dir, &pattern)?;
    let pool = WorkerPool::new(
        CommandExtractor::from_config(&config.extractor),
        ApplicantParser::new(rules),
        pattern,
    )
    .with_config(&config.pool);

    let records = pool.run(candidates).await?;

    let mut out = Vec::new();
    finalize(&mut out, records)?;
    Ok(String::from_utf8(out).unwrap())
}

fn cat_config() -> CoopexConfig {
    let mut config = CoopexConfig::default();
    config.extractor.command = "cat".to_string();
    config
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_two_applicants_sorted_as_strings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Jane Doe (12).pdf"),
        "jane@example.com\nTerm Average: 88\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("Alan Smith (3).pdf"),
        "ALAN@example.com\nTerm Average: 75.5\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "jane@example.com").unwrap();

    let csv = run_dir(dir.path(), &cat_config()).await.unwrap();
    let lines: Vec<_> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID,First name,Last name"));
    assert_eq!(
        lines[1],
        "12,Jane,Doe,jane@example.com,Jane Doe <jane@example.com>,,,No,,88,88.0"
    );
    assert_eq!(
        lines[2],
        "3,Alan,Smith,alan@example.com,Alan Smith <alan@example.com>,,,No,,75.5,75.5"
    );
}

#[tokio::test]
async fn test_document_without_matches() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Jane Doe (12).pdf"), "nothing to see").unwrap();

    let csv = run_dir(dir.path(), &cat_config()).await.unwrap();
    assert_eq!(csv.lines().nth(1), Some("12,Jane,Doe,,,,,No,,,Unknown"));
}

#[tokio::test]
async fn test_converter_failure_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Jane Doe (12).pdf"), "ok").unwrap();

    let mut config = CoopexConfig::default();
    config.extractor.command = "false".to_string();

    let err = run_dir(dir.path(), &config).await.unwrap_err();
    assert!(matches!(err, CoopexError::TextExtraction { .. }));
}

#[tokio::test]
async fn test_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_dir(&dir.path().join("nope"), &cat_config())
        .await
        .unwrap_err();
    assert!(matches!(err, CoopexError::Dispatch(_)));
}
