// Index command tests

use crate::common::fixtures::{chapter, DocSite};
use docdex::cli::commands::index::{execute, IndexArgs};
use docdex::cli::OutputFormat;
use docdex::core::config::Config;
use std::path::PathBuf;
use tempfile::TempDir;

fn args(root: PathBuf, output: PathBuf) -> IndexArgs {
    IndexArgs {
        root,
        language: None,
        encoding: None,
        output: Some(output),
        include: Vec::new(),
        exclude: Vec::new(),
        quiet: true,
    }
}

#[test]
fn test_index_command_writes_artifact() {
    let site = DocSite::with_pages(&[
        ("ch01.html", &chapter("One", "alpha")),
        ("ch02.html", &chapter("Two", "alpha beta")),
    ]);
    let out = TempDir::new().unwrap();
    let artifact = out.path().join("index.json");

    execute(
        args(site.path().to_path_buf(), artifact.clone()),
        Config::default(),
        OutputFormat::Json,
    )
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&artifact).unwrap()).unwrap();
    assert_eq!(value["document_count"], 2);
    assert_eq!(value["terms"]["alpha"], serde_json::json!([0, 1]));
}

#[test]
fn test_index_command_language_flag_overrides_config() {
    let site = DocSite::with_pages(&[("p.html", &chapter("P", "日本語"))]);
    let out = TempDir::new().unwrap();
    let artifact = out.path().join("index.json");

    let mut index_args = args(site.path().to_path_buf(), artifact.clone());
    index_args.language = Some("ja".to_string());

    execute(index_args, Config::default(), OutputFormat::Json).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&artifact).unwrap()).unwrap();
    assert_eq!(value["language"], "ja");
    assert!(value["terms"].get("日本").is_some());
}

#[test]
fn test_index_command_rejects_missing_root() {
    let out = TempDir::new().unwrap();
    let result = execute(
        args(PathBuf::from("/no/such/tree"), out.path().join("i.json")),
        Config::default(),
        OutputFormat::Json,
    );
    assert!(result.is_err());
}

#[test]
fn test_index_command_rejects_file_root() {
    let site = DocSite::with_pages(&[("p.html", &chapter("P", "x"))]);
    let out = TempDir::new().unwrap();
    let result = execute(
        args(site.path().join("p.html"), out.path().join("i.json")),
        Config::default(),
        OutputFormat::Json,
    );
    assert!(result.is_err());
}

#[test]
fn test_index_command_rejects_invalid_language() {
    let site = DocSite::with_pages(&[("p.html", &chapter("P", "x"))]);
    let out = TempDir::new().unwrap();

    let mut index_args = args(site.path().to_path_buf(), out.path().join("i.json"));
    index_args.language = Some("e1".to_string());

    let result = execute(index_args, Config::default(), OutputFormat::Json);
    assert!(result.is_err());
}
