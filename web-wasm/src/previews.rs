//! Object URLによるプレビュー
//!
//! 結果が破棄されると `URL.revokeObjectURL` で解放される。

use js_sys::{Array, Uint8Array};
use photo_annotator_common::{Error, PendingFile, Preview, PreviewFactory, Result};
use web_sys::{Blob, BlobPropertyBag, Url};

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUrlPreviews;

impl PreviewFactory for ObjectUrlPreviews {
    fn create(&self, file: &PendingFile) -> Result<Preview> {
        let parts = Array::of1(&Uint8Array::from(file.content()));
        let options = BlobPropertyBag::new();
        options.set_type(file.mime_type());

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| Error::preview(file.name(), format!("Blob作成失敗: {:?}", e)))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| Error::preview(file.name(), format!("createObjectURL失敗: {:?}", e)))?;

        Ok(Preview::scoped(url, revoke))
    }
}

/// Object URLを解放する（失敗してもコンソールに出すだけ）
fn revoke(url: &str) {
    if let Err(err) = Url::revoke_object_url(url) {
        gloo::console::warn!(format!("revokeObjectURL失敗 {}: {:?}", url, err));
    }
}
