pub mod previews;

pub use previews::DataUrlPreviews;

use crate::error::{AnnotatorError, Result};
use indicatif::ProgressBar;
use photo_annotator_common::{
    AddReport, AnalysisSettings, AnnotationResult, MockAnnotator, PendingFile, Phase,
    PreviewFactory, Session,
};
use std::future::Future;
use std::time::Duration;

/// 1回分の解析結果
#[derive(Debug)]
pub struct AnnotationRun {
    pub report: AddReport,
    pub results: Vec<AnnotationResult>,
}

/// 待ちリストへの追加から模擬解析の完了までを1セッションで実行する
///
/// `cancel` が先に完了した場合はリセット扱いで `Cancelled` を返す。
pub async fn run_annotation<P, C>(
    files: Vec<PendingFile>,
    source: &str,
    settings: &AnalysisSettings,
    previews: &P,
    cancel: C,
    verbose: bool,
) -> Result<AnnotationRun>
where
    P: PreviewFactory + ?Sized,
    C: Future<Output = ()>,
{
    let mut session = Session::new(settings.mime_policy);
    let report = session.add_files(files);

    if verbose {
        for rejection in &report.rejected {
            eprintln!("  スキップ: {} ({}, {})", rejection.name, rejection.mime_type, rejection.reason);
        }
    }

    let Some(job) = session.start_processing() else {
        return Err(AnnotatorError::NoImagesFound(source.to_string()));
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Processing {} images...", job.files().len()));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = tokio::select! {
        outcome = job.run(tokio::time::sleep(settings.delay()), &MockAnnotator, previews) => outcome,
        _ = cancel => {
            session.reset_all();
            spinner.finish_and_clear();
            return Err(AnnotatorError::Cancelled);
        }
    };
    spinner.finish_and_clear();

    session.apply(outcome);

    match session.phase() {
        Phase::ShowingResults => Ok(AnnotationRun {
            report,
            results: session.into_results(),
        }),
        _ => Err(AnnotatorError::Analysis(
            session.last_error().unwrap_or("解析結果がありません").to_string(),
        )),
    }
}
