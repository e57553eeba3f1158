//! MIMEタイプ判定
//!
//! 受理するのは申告タイプが `image/jpeg` / `image/jpg` のファイルのみ。
//! 申告タイプはクライアント由来で未検証のため、`VerifySignature` では
//! 内容のマジックバイトも確認する。

use image::ImageFormat;
use serde::{Deserialize, Serialize};

/// 受理するMIMEタイプ
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg"];

/// ファイル選択ダイアログのaccept属性
pub const ACCEPT_ATTRIBUTE: &str = ".jpg,.jpeg";

/// 拡張子不明時の申告タイプ
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// 申告MIMEタイプの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimePolicy {
    /// 申告タイプのみで判定
    #[default]
    Trust,
    /// 申告タイプに加えてJPEGシグネチャを確認
    Verify,
}

impl std::str::FromStr for MimePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trust" | "declared" => Ok(MimePolicy::Trust),
            "verify" | "signature" => Ok(MimePolicy::Verify),
            _ => Err(format!("Unknown MIME policy: {}. Use trust or verify", s)),
        }
    }
}

impl std::fmt::Display for MimePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MimePolicy::Trust => write!(f, "trust"),
            MimePolicy::Verify => write!(f, "verify"),
        }
    }
}

/// 申告タイプが受理対象か（完全一致）
pub fn is_accepted_mime(mime_type: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime_type)
}

/// 内容がJPEGとして認識できるか
pub fn looks_like_jpeg(content: &[u8]) -> bool {
    matches!(image::guess_format(content), Ok(ImageFormat::Jpeg))
}

/// 拡張子から申告タイプを推定（CLIでのスキャン用）
pub fn mime_from_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => UNKNOWN_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_accepted_mime() {
        assert!(is_accepted_mime("image/jpeg"));
        assert!(is_accepted_mime("image/jpg"));
        assert!(!is_accepted_mime("image/png"));
        assert!(!is_accepted_mime("IMAGE/JPEG"));
        assert!(!is_accepted_mime("image/jpeg; charset=binary"));
        assert!(!is_accepted_mime(""));
    }

    #[test]
    fn test_looks_like_jpeg() {
        assert!(looks_like_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]));
        assert!(!looks_like_jpeg(b"\x89PNG\r\n\x1a\n"));
        assert!(!looks_like_jpeg(b"hello"));
        assert!(!looks_like_jpeg(&[]));
    }

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension("jpg"), "image/jpeg");
        assert_eq!(mime_from_extension("JPEG"), "image/jpeg");
        assert_eq!(mime_from_extension("png"), "image/png");
        assert_eq!(mime_from_extension("xyz"), UNKNOWN_MIME_TYPE);
    }

    #[test]
    fn test_only_jpg_and_jpeg_extensions_are_accepted() {
        // ブラウザ側の accept=".jpg,.jpeg" と揃える
        assert!(is_accepted_mime(mime_from_extension("jpg")));
        assert!(is_accepted_mime(mime_from_extension("jpeg")));
        assert!(!is_accepted_mime(mime_from_extension("jpe")));
        assert!(!is_accepted_mime(mime_from_extension("jfif")));
    }

    #[test]
    fn test_mime_policy_parse_and_display() {
        assert_eq!("trust".parse::<MimePolicy>(), Ok(MimePolicy::Trust));
        assert_eq!("Verify".parse::<MimePolicy>(), Ok(MimePolicy::Verify));
        assert!("strict".parse::<MimePolicy>().is_err());
        assert_eq!(MimePolicy::Verify.to_string(), "verify");
        assert_eq!(MimePolicy::default(), MimePolicy::Trust);
    }

    #[test]
    fn test_mime_policy_serde() {
        let json = serde_json::to_string(&MimePolicy::Verify).expect("シリアライズ失敗");
        assert_eq!(json, "\"verify\"");
        let policy: MimePolicy = serde_json::from_str("\"trust\"").expect("デシリアライズ失敗");
        assert_eq!(policy, MimePolicy::Trust);
    }
}
