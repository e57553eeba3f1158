//! エラー型定義
//!
//! 共通ライブラリで起きうる失敗はプレビュー作成だけ。
//! ファイル読み込みや設定はそれぞれのフロントエンド側で扱う。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// プレビュー（Object URL / data URL）を作れなかった
    #[error("Failed to create preview for {name}: {reason}")]
    Preview { name: String, reason: String },
}

impl Error {
    pub fn preview(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Preview {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_error_names_file() {
        let error = Error::preview("cat.jpg", "createObjectURL failed");
        assert_eq!(error.to_string(), "Failed to create preview for cat.jpg: createObjectURL failed");
    }
}
