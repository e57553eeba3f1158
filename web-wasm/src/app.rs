//! メインアプリケーションコンポーネント

use crate::components::{
    header::Header,
    pending_list::PendingList,
    processing_indicator::ProcessingIndicator,
    results_gallery::ResultsGallery,
    upload_area::UploadArea,
};
use crate::previews::ObjectUrlPreviews;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use photo_annotator_common::{
    AddReport, AnalysisSettings, MockAnnotator, PendingFile, Phase, Session,
};

/// 追加結果の通知をコンソールと画面に出す
fn report(notice: WriteSignal<Option<String>>, added: AddReport) {
    let message = added.notice();
    if let Some(message) = &message {
        gloo::console::info!(message.clone());
    }
    notice.set(message);
}

#[component]
pub fn App() -> impl IntoView {
    let settings = AnalysisSettings::default();

    // アプリケーション状態
    let session = RwSignal::new(Session::new(settings.mime_policy));
    let (notice, set_notice) = signal(None::<String>);

    let phase = Signal::derive(move || session.with(|s| s.phase()));
    let is_dragging = Signal::derive(move || session.with(|s| s.is_dragging()));
    let is_processing = Signal::derive(move || session.with(|s| s.is_processing()));
    let pending = Signal::derive(move || session.with(|s| s.pending().to_vec()));
    let results = Signal::derive(move || session.with(|s| s.results().to_vec()));
    let last_error = Signal::derive(move || session.with(|s| s.last_error().map(str::to_string)));

    let on_drag_enter = move |_: ()| session.update(|s| s.drag_enter());
    let on_drag_leave = move |_: ()| session.update(|s| s.drag_leave());

    let on_drop = move |files: Vec<PendingFile>| {
        if let Some(added) = session.try_update(|s| s.drop_files(files)) {
            report(set_notice, added);
        }
    };

    let on_select = move |files: Vec<PendingFile>| {
        if let Some(added) = session.try_update(|s| s.add_files(files)) {
            report(set_notice, added);
        }
    };

    let on_remove = move |index: usize| {
        session.update(|s| {
            s.remove_file(index);
        });
    };

    // Clear All / Upload New Images
    let on_reset = move |_: ()| {
        set_notice.set(None);
        session.update(|s| s.reset_all());
    };

    // 解析開始ハンドラ
    let on_process = move |_: ()| {
        let Some(job) = session.try_update(|s| s.start_processing()).flatten() else {
            return;
        };
        set_notice.set(None);
        let generation = job.generation();
        let delay_ms = u32::try_from(settings.delay_ms).unwrap_or(u32::MAX);

        spawn_local(async move {
            let outcome = job
                .run(TimeoutFuture::new(delay_ms), &MockAnnotator, &ObjectUrlPreviews)
                .await;
            let applied = session.try_update(|s| s.apply(outcome)).unwrap_or(false);
            if !applied {
                gloo::console::debug!(format!("discarded outcome of generation {}", generation));
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <Show when=move || phase.get() == Phase::Selecting>
                <UploadArea
                    is_dragging=is_dragging
                    on_drag_enter=on_drag_enter
                    on_drag_leave=on_drag_leave
                    on_drop=on_drop
                    on_select=on_select
                />

                {move || notice.get().map(|message| view! { <p class="notice">{message}</p> })}
                {move || last_error.get().map(|message| view! { <p class="error">{message}</p> })}

                <Show when=move || !pending.get().is_empty()>
                    <PendingList
                        files=pending
                        is_processing=is_processing
                        on_remove=on_remove
                        on_clear=on_reset
                        on_process=on_process
                    />
                </Show>
            </Show>

            <Show when=move || phase.get() == Phase::Processing>
                <ProcessingIndicator />
            </Show>

            <Show when=move || phase.get() == Phase::ShowingResults>
                <ResultsGallery
                    results=results
                    on_reset=on_reset
                />
            </Show>
        </div>
    }
}

