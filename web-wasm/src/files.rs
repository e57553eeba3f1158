//! ブラウザのFileListから待ちファイルを作る

use gloo::file::futures::read_as_bytes;
use photo_annotator_common::mime::is_accepted_mime;
use photo_annotator_common::PendingFile;
use web_sys::{File, FileList};

/// FileListの中身をVecに移す（input要素を空にする前に取り出す）
pub fn collect_files(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// ファイル内容を順に読み込む
///
/// JPEG以外は受理されないので内容は読まずにサイズだけ持たせる。
/// 読み込みに失敗したファイルはコンソールに出して飛ばす。
pub async fn read_pending_files(files: Vec<File>) -> Vec<PendingFile> {
    let mut pending = Vec::with_capacity(files.len());

    for file in files {
        let name = file.name();
        let mime_type = file.type_();
        let size = file.size() as u64;

        if !is_accepted_mime(&mime_type) {
            pending.push(PendingFile::without_content(name, mime_type, size));
            continue;
        }

        let file = gloo::file::File::from(file);
        match read_as_bytes(&file).await {
            Ok(bytes) => pending.push(PendingFile::new(name, mime_type, bytes)),
            Err(err) => gloo::console::warn!(format!("failed to read {}: {:?}", name, err)),
        }
    }

    pending
}
