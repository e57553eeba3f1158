//! アップロード待ちリスト
//!
//! ドロップ/ファイル選択されたファイルをJPEGのみに絞り込んで保持する。
//! 受理されなかったファイルは `AddReport` で呼び出し側に返す。

use crate::mime::{is_accepted_mime, looks_like_jpeg, MimePolicy};
use crate::types::PendingFile;
use std::fmt;

/// 不受理の理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// 申告タイプがJPEG以外
    UnsupportedType,
    /// 申告はJPEGだが内容がJPEGでない
    SignatureMismatch,
    /// 処理中/結果表示中で追加を受け付けない
    NotAccepting,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::UnsupportedType => write!(f, "only .jpg/.jpeg files are accepted"),
            RejectReason::SignatureMismatch => write!(f, "content is not a JPEG image"),
            RejectReason::NotAccepting => write!(f, "uploads are closed until reset"),
        }
    }
}

/// 不受理ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub name: String,
    pub mime_type: String,
    pub reason: RejectReason,
}

/// 追加結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
}

impl AddReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// 不受理があった場合の通知文
    pub fn notice(&self) -> Option<String> {
        match self.rejected.as_slice() {
            [] => None,
            [only] => Some(format!("Skipped {}: {}", only.name, only.reason)),
            many => Some(format!("Skipped {} files: {}", many.len(), many[0].reason)),
        }
    }

    pub(crate) fn reject_all<I>(files: I, reason: RejectReason) -> Self
    where
        I: IntoIterator<Item = PendingFile>,
    {
        Self {
            accepted: 0,
            rejected: files
                .into_iter()
                .map(|file| Rejection {
                    name: file.name().to_string(),
                    mime_type: file.mime_type().to_string(),
                    reason,
                })
                .collect(),
        }
    }
}

/// 解析待ちファイルのリスト
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    files: Vec<PendingFile>,
    policy: MimePolicy,
}

impl UploadQueue {
    pub fn new(policy: MimePolicy) -> Self {
        Self {
            files: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> MimePolicy {
        self.policy
    }

    /// 受理判定
    pub fn check(&self, file: &PendingFile) -> Result<(), RejectReason> {
        if !is_accepted_mime(file.mime_type()) {
            return Err(RejectReason::UnsupportedType);
        }
        if self.policy == MimePolicy::Verify && !looks_like_jpeg(file.content()) {
            return Err(RejectReason::SignatureMismatch);
        }
        Ok(())
    }

    /// JPEGのみ末尾に追加（既存の順序・入力順を維持）
    pub fn add_files<I>(&mut self, input: I) -> AddReport
    where
        I: IntoIterator<Item = PendingFile>,
    {
        let mut report = AddReport::default();

        for file in input {
            match self.check(&file) {
                Ok(()) => {
                    self.files.push(file);
                    report.accepted += 1;
                }
                Err(reason) => {
                    tracing::debug!(name = file.name(), mime = file.mime_type(), %reason, "rejected file");
                    report.rejected.push(Rejection {
                        name: file.name().to_string(),
                        mime_type: file.mime_type().to_string(),
                        reason,
                    });
                }
            }
        }

        report
    }

    /// 指定位置を削除。範囲外は何もしない
    pub fn remove_file(&mut self, index: usize) -> Option<PendingFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
