use crate::error::{AnnotatorError, Result};
use crate::export::is_default_output;
use photo_annotator_common::mime::{is_accepted_mime, mime_from_extension, UNKNOWN_MIME_TYPE};
use photo_annotator_common::PendingFile;
use std::path::Path;
use walkdir::WalkDir;

/// フォルダ内の通常ファイルを待ちファイルとして読み込む
///
/// 前回の既定出力 (annotations.json/html) は対象外。
/// 申告タイプは拡張子から決める。JPEG以外はどうせ受理されないので
/// 内容は読まずサイズだけ持たせる。
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<PendingFile>> {
    if !folder.is_dir() {
        return Err(AnnotatorError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut entries: Vec<_> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| !is_default_output(e.path()))
        .collect();

    // ファイル名でソート
    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    let mut files = Vec::with_capacity(entries.len());
    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let mime_type = declared_mime(path);

        let file = if is_accepted_mime(mime_type) {
            PendingFile::new(name, mime_type, std::fs::read(path)?)
        } else {
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            PendingFile::without_content(name, mime_type, size)
        };
        files.push(file);
    }

    Ok(files)
}

fn declared_mime(path: &Path) -> &'static str {
    path.extension()
        .map(|ext| mime_from_extension(&ext.to_string_lossy()))
        .unwrap_or(UNKNOWN_MIME_TYPE)
}
