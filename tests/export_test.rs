//! JSON/HTML出力の統合テスト

use photo_annotator::cli::OutputFormat;
use photo_annotator::export::{export_results, json};
use photo_annotator::scanner::scan_folder;
use photo_annotator_common::{AnnotationResult, BoundingBox, Preview};
use std::sync::Arc;
use tempfile::tempdir;

fn create_test_result(index: usize) -> AnnotationResult {
    AnnotationResult {
        name: format!("test_{}.jpg", index),
        preview: Arc::new(Preview::detached(format!("test_{}.jpg", index))),
        tags: vec!["Car".to_string(), "Tree".to_string()],
        boxes: vec![BoundingBox {
            x: 10.0 + index as f64,
            y: 25.0,
            width: 12.0,
            height: 30.0,
            label: "Car".to_string(),
        }],
    }
}

#[test]
fn test_json_output() {
    let results: Vec<_> = (1..=3).map(create_test_result).collect();
    let text = json::to_json(&results).expect("JSON生成失敗");

    let value: serde_json::Value = serde_json::from_str(&text).expect("JSONとして読めない");
    let array = value.as_array().expect("配列のはず");
    assert_eq!(array.len(), 3);
    assert_eq!(array[0]["name"], "test_1.jpg");
    assert_eq!(array[0]["tags"][1], "Tree");
    assert_eq!(array[0]["boxes"][0]["label"], "Car");
    assert_eq!(array[0]["boxes"][0]["x"], 11.0);
    assert!(array[0].get("preview").is_none());
}

#[test]
fn test_export_json_to_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let results = vec![create_test_result(1)];

    let written = export_results(&results, OutputFormat::Json, Some(dir.path()), dir.path())
        .expect("出力失敗");

    assert_eq!(written, vec![dir.path().join("annotations.json")]);
    assert!(written[0].exists());
}

#[test]
fn test_export_html_default_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let results = vec![create_test_result(1), create_test_result(2)];

    let written = export_results(&results, OutputFormat::Html, None, dir.path()).expect("出力失敗");

    assert_eq!(written.len(), 1);
    let html = std::fs::read_to_string(&written[0]).expect("読み込み失敗");
    assert!(html.contains("test_2.jpg"));
    assert_eq!(html.matches("class=\"box\"").count(), 2);
}

#[test]
fn test_export_both_with_file_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("report.json");
    let results = vec![create_test_result(1)];

    let written = export_results(&results, OutputFormat::Both, Some(&output), dir.path())
        .expect("出力失敗");

    assert_eq!(written, vec![dir.path().join("report.json"), dir.path().join("report.html")]);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn test_export_creates_missing_output_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("out").join("run1");
    let results = vec![create_test_result(1)];

    let written = export_results(&results, OutputFormat::Both, Some(&output), dir.path())
        .expect("出力失敗");

    assert_eq!(written, vec![output.join("annotations.json"), output.join("annotations.html")]);
    assert!(written.iter().all(|p| p.exists()));
}

/// 既定出力を入力フォルダに書いても、次のスキャンには混ざらない
#[test]
fn test_default_outputs_are_not_rescanned() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("cat.jpg"), [0xFFu8, 0xD8, 0xFF]).expect("書き込み失敗");
    let results = vec![create_test_result(1)];

    export_results(&results, OutputFormat::Both, None, dir.path()).expect("出力失敗");
    assert!(dir.path().join("annotations.html").exists());

    let files = scan_folder(dir.path(), false).expect("スキャン失敗");
    let names: Vec<_> = files.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["cat.jpg"]);
}
