//! アップロード〜模擬解析の状態管理
//!
//! `Selecting → Processing → ShowingResults → (reset) → Selecting`
//!
//! 解析ジョブは世代番号付きで発行し、処理開始・リセットのたびに世代を進めて
//! 実行中のジョブを中断する。古い世代の完了通知は `apply` で破棄される。

use crate::error::Error;
use crate::mime::MimePolicy;
use crate::mock::MockAnnotator;
use crate::preview::PreviewFactory;
use crate::types::{AnnotationResult, PendingFile};
use crate::upload::{AddReport, RejectReason, UploadQueue};
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use std::future::Future;

/// 画面状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Selecting,
    Processing,
    ShowingResults,
}

/// 解析ジョブの結果
#[derive(Debug)]
pub enum JobOutcome {
    Completed {
        generation: u64,
        results: Vec<AnnotationResult>,
    },
    Failed {
        generation: u64,
        error: Error,
    },
    Cancelled {
        generation: u64,
    },
}

impl JobOutcome {
    pub fn generation(&self) -> u64 {
        match self {
            JobOutcome::Completed { generation, .. }
            | JobOutcome::Failed { generation, .. }
            | JobOutcome::Cancelled { generation } => *generation,
        }
    }
}

/// `Session::start_processing` が発行する解析ジョブ
///
/// 待ち時間はプラットフォームのタイマー（tokio / gloo）を外から渡す。
#[derive(Debug)]
pub struct AnalysisJob {
    generation: u64,
    files: Vec<PendingFile>,
    registration: AbortRegistration,
}

impl AnalysisJob {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    /// `delay` の完了を待ってから結果を生成する。
    /// 待機中にセッション側で中断されると `Cancelled` を返す。
    pub async fn run<D, P>(self, delay: D, annotator: &MockAnnotator, previews: &P) -> JobOutcome
    where
        D: Future<Output = ()>,
        P: PreviewFactory + ?Sized,
    {
        let AnalysisJob {
            generation,
            files,
            registration,
        } = self;

        if Abortable::new(delay, registration).await.is_err() {
            tracing::debug!(generation, "analysis job aborted");
            return JobOutcome::Cancelled { generation };
        }

        match annotator.annotate(&files, previews) {
            Ok(results) => JobOutcome::Completed { generation, results },
            Err(error) => JobOutcome::Failed { generation, error },
        }
    }
}

/// アップロード画面1つ分の状態
#[derive(Debug)]
pub struct Session {
    queue: UploadQueue,
    results: Vec<AnnotationResult>,
    phase: Phase,
    generation: u64,
    in_flight: Option<AbortHandle>,
    is_dragging: bool,
    last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MimePolicy::default())
    }
}

impl Session {
    pub fn new(policy: MimePolicy) -> Self {
        Self {
            queue: UploadQueue::new(policy),
            results: Vec::new(),
            phase: Phase::Selecting,
            generation: 0,
            in_flight: None,
            is_dragging: false,
            last_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> &[PendingFile] {
        self.queue.files()
    }

    pub fn results(&self) -> &[AnnotationResult] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    // ドラッグ状態は見た目のためだけに使う
    pub fn drag_enter(&mut self) {
        self.is_dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// 待ちリストへ追加。受け付けない状態では全件 `NotAccepting`
    pub fn add_files<I>(&mut self, files: I) -> AddReport
    where
        I: IntoIterator<Item = PendingFile>,
    {
        if self.phase != Phase::Selecting {
            let report = AddReport::reject_all(files, RejectReason::NotAccepting);
            tracing::info!(phase = ?self.phase, rejected = report.rejected_count(), "uploads closed");
            return report;
        }

        let report = self.queue.add_files(files);
        if !report.rejected.is_empty() {
            tracing::info!(
                accepted = report.accepted,
                rejected = report.rejected_count(),
                "some files were not accepted"
            );
        }
        report
    }

    /// ドロップ: ドラッグ状態を解除してから追加
    pub fn drop_files<I>(&mut self, files: I) -> AddReport
    where
        I: IntoIterator<Item = PendingFile>,
    {
        self.drag_leave();
        self.add_files(files)
    }

    pub fn remove_file(&mut self, index: usize) -> Option<PendingFile> {
        if self.phase != Phase::Selecting {
            return None;
        }
        self.queue.remove_file(index)
    }

    /// 待ちリスト・結果を破棄し、実行中のジョブを無効化する
    pub fn reset_all(&mut self) {
        self.cancel_in_flight();
        self.generation += 1;
        self.queue.clear();
        self.results.clear();
        self.phase = Phase::Selecting;
        self.last_error = None;
        tracing::debug!(generation = self.generation, "session reset");
    }

    /// 解析開始。待ちリストが空なら何もしない
    ///
    /// 処理中に呼ばれた場合は前のジョブを中断してやり直す。
    pub fn start_processing(&mut self) -> Option<AnalysisJob> {
        if self.queue.is_empty() || self.phase == Phase::ShowingResults {
            return None;
        }

        self.cancel_in_flight();
        self.generation += 1;

        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        self.phase = Phase::Processing;
        self.last_error = None;

        tracing::debug!(generation = self.generation, files = self.queue.len(), "processing started");

        Some(AnalysisJob {
            generation: self.generation,
            files: self.queue.files().to_vec(),
            registration,
        })
    }

    /// ジョブ結果を反映。古い世代・処理中以外の結果は捨てて `false`
    pub fn apply(&mut self, outcome: JobOutcome) -> bool {
        if outcome.generation() != self.generation || self.phase != Phase::Processing {
            tracing::info!(
                outcome = outcome.generation(),
                current = self.generation,
                "discarding stale analysis outcome"
            );
            return false;
        }

        self.in_flight = None;

        match outcome {
            JobOutcome::Completed { results, .. } => {
                tracing::debug!(results = results.len(), "analysis completed");
                self.queue.clear();
                self.results = results;
                self.phase = Phase::ShowingResults;
            }
            JobOutcome::Failed { error, .. } => {
                tracing::warn!(%error, "analysis failed");
                self.last_error = Some(error.to_string());
                self.phase = Phase::Selecting;
            }
            JobOutcome::Cancelled { .. } => {
                self.phase = Phase::Selecting;
            }
        }

        true
    }

    /// 結果を取り出す（セッションは空になる）
    pub fn into_results(mut self) -> Vec<AnnotationResult> {
        std::mem::take(&mut self.results)
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
