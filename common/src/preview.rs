//! 画像プレビュー参照
//!
//! ブラウザのObject URLのように明示的な解放が必要な参照を、
//! 所有者の破棄と同時に解放するスコープ付きリソースとして扱う。

use crate::error::Result;
use crate::types::PendingFile;
use std::fmt;

type Release = Box<dyn FnOnce(&str) + Send + Sync>;

/// 表示用の画像参照（URL）
///
/// `scoped` で作られたものはdrop時に解放処理を1回だけ呼ぶ。
pub struct Preview {
    url: String,
    release: Option<Release>,
}

impl Preview {
    /// 解放不要な参照（data URL、ファイルパスなど）
    pub fn detached(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            release: None,
        }
    }

    /// drop時に `release(url)` を呼ぶ参照
    pub fn scoped<F>(url: impl Into<String>, release: F) -> Self
    where
        F: FnOnce(&str) + Send + Sync + 'static,
    {
        Self {
            url: url.into(),
            release: Some(Box::new(release)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_scoped(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Preview {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(url = %self.url, "releasing preview");
            release(&self.url);
        }
    }
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("url", &self.url)
            .field("scoped", &self.is_scoped())
            .finish()
    }
}

/// ファイル内容からプレビュー参照を作る
pub trait PreviewFactory {
    fn create(&self, file: &PendingFile) -> Result<Preview>;
}

/// ファイル名をそのまま参照にする（描画しない用途向け）
#[derive(Debug, Clone, Copy, Default)]
pub struct NamePreviews;

impl PreviewFactory for NamePreviews {
    fn create(&self, file: &PendingFile) -> Result<Preview> {
        Ok(Preview::detached(file.name()))
    }
}
