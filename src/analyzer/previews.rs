//! CLI用プレビュー参照
//!
//! HTMLレポートに埋め込むため、画像をdata URLに変換する。
//! data URLは解放不要なので detached で作る。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use photo_annotator_common::{PendingFile, Preview, PreviewFactory, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlPreviews;

impl PreviewFactory for DataUrlPreviews {
    fn create(&self, file: &PendingFile) -> Result<Preview> {
        Ok(Preview::detached(to_data_url(file.mime_type(), file.content())))
    }
}

/// "data:image/jpeg;base64,..." 形式
pub fn to_data_url(mime_type: &str, content: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(content))
}
