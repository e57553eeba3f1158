use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotatorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("JPEG画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("解析を中断しました")]
    Cancelled,

    #[error("解析エラー: {0}")]
    Analysis(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_annotator_common::Error),
}

pub type Result<T> = std::result::Result<T, AnnotatorError>;
