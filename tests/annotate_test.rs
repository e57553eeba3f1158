//! スキャン〜模擬解析の統合テスト

use futures::future::{pending, ready};
use photo_annotator::analyzer::{run_annotation, DataUrlPreviews};
use photo_annotator::error::AnnotatorError;
use photo_annotator::scanner;
use photo_annotator_common::{AnalysisSettings, MimePolicy, NamePreviews, RejectReason, TAG_VOCABULARY};
use std::path::Path;
use tempfile::tempdir;

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

fn fast_settings() -> AnalysisSettings {
    AnalysisSettings {
        delay_ms: 0,
        ..Default::default()
    }
}

fn write(dir: &Path, name: &str, content: &[u8]) {
    std::fs::write(dir.join(name), content).expect("書き込み失敗");
}

/// cat.jpg は受理、dog.png は除外
#[tokio::test]
async fn test_cat_jpg_accepted_dog_png_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    write(dir.path(), "cat.jpg", JPEG_BYTES);
    write(dir.path(), "dog.png", b"\x89PNG\r\n\x1a\n");

    let files = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");
    let run = run_annotation(files, "test", &fast_settings(), &NamePreviews, pending(), false)
        .await
        .expect("解析失敗");

    assert_eq!(run.results.len(), 1);
    assert_eq!(run.results[0].name, "cat.jpg");
    assert_eq!(run.report.accepted, 1);
    assert_eq!(run.report.rejected.len(), 1);
    assert_eq!(run.report.rejected[0].name, "dog.png");
    assert_eq!(run.report.rejected[0].reason, RejectReason::UnsupportedType);
}

/// JPEG3枚 → 結果3件
#[tokio::test]
async fn test_three_jpegs_produce_three_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    for name in ["a.jpg", "b.jpeg", "c.JPG"] {
        write(dir.path(), name, JPEG_BYTES);
    }

    let files = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");
    let run = run_annotation(files, "test", &fast_settings(), &DataUrlPreviews, pending(), false)
        .await
        .expect("解析失敗");

    assert_eq!(run.results.len(), 3);
    for result in &run.results {
        assert!(!result.tags.is_empty() && result.tags.len() <= 3);
        assert!(!result.boxes.is_empty() && result.boxes.len() <= 2);
        assert!(result.tags.iter().all(|t| TAG_VOCABULARY.contains(&t.as_str())));
        assert!(result.boxes.iter().all(|b| result.tags.contains(&b.label)));
        assert!(result.preview_url().starts_with("data:image/jpeg;base64,"));
    }
}

/// JPEGがなければ NoImagesFound
#[tokio::test]
async fn test_no_jpegs_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    write(dir.path(), "notes.txt", b"hello");

    let files = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");
    let result = run_annotation(files, "photos", &fast_settings(), &NamePreviews, pending(), false).await;

    match result {
        Err(AnnotatorError::NoImagesFound(source)) => assert_eq!(source, "photos"),
        other => panic!("NoImagesFound expected: {:?}", other),
    }
}

/// 解析中のキャンセルは結果を返さない
#[tokio::test]
async fn test_cancel_before_completion() {
    let dir = tempdir().expect("Failed to create temp dir");
    write(dir.path(), "a.jpg", JPEG_BYTES);

    let files = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");
    let settings = AnalysisSettings {
        delay_ms: 60_000,
        ..Default::default()
    };
    let result = run_annotation(files, "test", &settings, &NamePreviews, ready(()), false).await;

    assert!(matches!(result, Err(AnnotatorError::Cancelled)));
}

/// 待ち時間中は完了しない（tokioの時間を進めて確認）
#[tokio::test(start_paused = true)]
async fn test_delay_is_respected() {
    let dir = tempdir().expect("Failed to create temp dir");
    write(dir.path(), "a.jpg", JPEG_BYTES);
    let files = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");

    let started = tokio::time::Instant::now();
    let run = run_annotation(files, "test", &AnalysisSettings::default(), &NamePreviews, pending(), false)
        .await
        .expect("解析失敗");

    assert!(started.elapsed() >= std::time::Duration::from_millis(2000));
    assert_eq!(run.results.len(), 1);
}

/// シグネチャ検証ありでは偽装JPEGを除外
#[tokio::test]
async fn test_verify_signature_rejects_fake_jpeg() {
    let dir = tempdir().expect("Failed to create temp dir");
    write(dir.path(), "fake.jpg", b"definitely not a jpeg");
    write(dir.path(), "real.jpg", JPEG_BYTES);

    let files = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");
    let settings = AnalysisSettings {
        delay_ms: 0,
        mime_policy: MimePolicy::Verify,
    };
    let run = run_annotation(files, "test", &settings, &NamePreviews, pending(), false)
        .await
        .expect("解析失敗");

    assert_eq!(run.results.len(), 1);
    assert_eq!(run.results[0].name, "real.jpg");
    assert_eq!(run.report.rejected[0].reason, RejectReason::SignatureMismatch);
}
