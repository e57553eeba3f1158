//! アップロード・解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - PendingFile: 解析待ちのファイル
//! - BoundingBox: 画像に重ねる検出枠（パーセント座標）
//! - AnnotationResult: 1ファイル分の模擬解析結果

use crate::preview::Preview;
use serde::Serialize;
use std::sync::Arc;

/// 解析待ちファイル
#[derive(Debug, Clone)]
pub struct PendingFile {
    name: String,
    size: u64,
    mime_type: String,
    content: Arc<[u8]>,
}

impl PendingFile {
    /// 内容からサイズを決めてファイルを作成
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size: content.len() as u64,
            mime_type: mime_type.into(),
            content,
        }
    }

    /// 内容を読まずに登録するファイル（ブラウザで受理されない型を先に弾く場合）
    pub fn without_content(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            content: Arc::from(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// 申告されたMIMEタイプ（ブラウザ/拡張子由来、未検証）
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// 一覧表示用のサイズ表記 ("12.3 KB")
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

/// 検出枠
///
/// 座標・サイズはすべて画像サイズに対するパーセント (0-100)。
/// 生成範囲は x, y ∈ [10, 80)、width, height ∈ [10, 40) で、
/// 画像からはみ出すことはありうる。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

impl BoundingBox {
    /// 表示用のCSS (絶対配置)
    pub fn css_position(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}%; height: {:.2}%;",
            self.x, self.y, self.width, self.height
        )
    }
}

/// 模擬解析結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationResult {
    pub name: String,

    #[serde(skip)]
    pub preview: Arc<Preview>,

    pub tags: Vec<String>,

    pub boxes: Vec<BoundingBox>,
}

impl AnnotationResult {
    pub fn preview_url(&self) -> &str {
        self.preview.url()
    }

    /// "N objects detected"
    pub fn detected_label(&self) -> String {
        format!("{} objects detected", self.boxes.len())
    }
}
