//! 選択済みファイル一覧コンポーネント

use leptos::prelude::*;
use photo_annotator_common::PendingFile;

#[component]
pub fn PendingList<FR, FC, FP>(
    files: Signal<Vec<PendingFile>>,
    is_processing: Signal<bool>,
    on_remove: FR,
    on_clear: FC,
    on_process: FP,
) -> impl IntoView
where
    FR: Fn(usize) + 'static + Clone + Send,
    FC: Fn(()) + 'static + Clone + Send,
    FP: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="pending-list">
            <h3>{move || format!("Selected Files ({})", files.get().len())}</h3>
            <ul>
                // 同名ファイルもあるので位置をキーに含める
                <For
                    each=move || files.get().into_iter().enumerate()
                    key=|(index, file)| (*index, file.name().to_string())
                    children=move |(index, file)| {
                        let on_remove = on_remove.clone();
                        view! {
                            <li class="pending-item">
                                <span class="file-name">{file.name().to_string()}</span>
                                <span class="file-size text-muted">{file.size_label()}</span>
                                <button
                                    class="btn-remove"
                                    title="Remove"
                                    on:click=move |_| on_remove(index)
                                >
                                    "✕"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <div class="actions">
                <button class="btn btn-secondary" on:click=move |_| on_clear(())>
                    "Clear All"
                </button>
                <button
                    class="btn btn-primary"
                    disabled=move || is_processing.get()
                    on:click=move |_| on_process(())
                >
                    "Process Images"
                </button>
            </div>
        </div>
    }
}
