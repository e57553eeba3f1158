//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイル選択の両方を受け付ける。
//! 受理判定はセッション側で行うので、ここでは読み込みだけを行う。

use crate::files::{collect_files, read_pending_files};
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use photo_annotator_common::{PendingFile, ACCEPT_ATTRIBUTE};
use web_sys::{DragEvent, Event, File, HtmlInputElement};

#[derive(Debug)]
enum DragAction {
    Enter,
    Leave,
    Over,
    Drop(Vec<File>),
}

/// ドラッグ系イベントの共通処理
///
/// どのイベントでもブラウザ既定の動作（ファイルを開いて遷移する）を止める。
fn handle_drag_event(ev: &DragEvent) -> Option<DragAction> {
    ev.prevent_default();
    ev.stop_propagation();

    match ev.type_().as_str() {
        "dragenter" => Some(DragAction::Enter),
        "dragleave" => Some(DragAction::Leave),
        "dragover" => Some(DragAction::Over),
        "drop" => Some(DragAction::Drop(
            ev.data_transfer()
                .and_then(|dt| dt.files())
                .map(|list| collect_files(&list))
                .unwrap_or_default(),
        )),
        _ => None,
    }
}

#[component]
pub fn UploadArea<FE, FL, FD, FS>(
    is_dragging: Signal<bool>,
    on_drag_enter: FE,
    on_drag_leave: FL,
    on_drop: FD,
    on_select: FS,
) -> impl IntoView
where
    FE: Fn(()) + 'static + Clone + Send,
    FL: Fn(()) + 'static + Clone + Send,
    FD: Fn(Vec<PendingFile>) + 'static + Clone + Send,
    FS: Fn(Vec<PendingFile>) + 'static + Clone + Send,
{
    let input_ref = NodeRef::<Input>::new();

    let handle_drag = move |ev: DragEvent| match handle_drag_event(&ev) {
        Some(DragAction::Enter) => on_drag_enter(()),
        Some(DragAction::Leave) => on_drag_leave(()),
        Some(DragAction::Drop(files)) => {
            // ドロップ時点でハイライトを消す（読み込み完了を待たない）
            on_drag_leave(());
            if files.is_empty() {
                return;
            }

            let on_drop = on_drop.clone();
            spawn_local(async move {
                on_drop(read_pending_files(files).await);
            });
        }
        Some(DragAction::Over) | None => {}
    };

    let handle_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input.files().map(|list| collect_files(&list)).unwrap_or_default();
        // 同じファイルを続けて選んでも change が発火するように空にする
        input.set_value("");
        if files.is_empty() {
            return;
        }

        let on_select = on_select.clone();
        spawn_local(async move {
            on_select(read_pending_files(files).await);
        });
    };

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                if is_dragging.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:dragenter=handle_drag.clone()
            on:dragleave=handle_drag.clone()
            on:dragover=handle_drag.clone()
            on:drop=handle_drag
        >
            <div class="upload-icon">"📷"</div>
            <h3>"Drag & Drop Images Here"</h3>
            <p class="text-muted">"Upload .jpg or .jpeg files. Single image or multiple files supported."</p>
            <button class="btn btn-primary" on:click=open_picker>
                "Browse Files"
            </button>
            <input
                node_ref=input_ref
                type="file"
                accept=ACCEPT_ATTRIBUTE
                multiple=true
                style="display: none"
                on:change=handle_change
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_annotator_common::Session;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{DragEventInit, Element, HtmlElement};

    fn drag_event(kind: &str) -> DragEvent {
        let init = DragEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        DragEvent::new_with_event_init_dict(kind, &init).expect("DragEvent作成失敗")
    }

    fn mount_point() -> HtmlElement {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("documentがない");
        let parent: HtmlElement = document
            .create_element("div")
            .expect("div作成失敗")
            .unchecked_into();
        document
            .body()
            .expect("bodyがない")
            .append_child(&parent)
            .expect("追加失敗");
        parent
    }

    async fn next_tick() {
        gloo::timers::future::TimeoutFuture::new(0).await;
    }

    #[wasm_bindgen_test]
    fn test_every_drag_event_prevents_default() {
        for kind in ["dragenter", "dragleave", "dragover", "drop"] {
            let ev = drag_event(kind);
            assert!(handle_drag_event(&ev).is_some(), "{}", kind);
            assert!(ev.default_prevented(), "{} の既定動作が止まっていない", kind);
        }
    }

    #[wasm_bindgen_test]
    fn test_drop_without_data_transfer_has_no_files() {
        match handle_drag_event(&drag_event("drop")) {
            Some(DragAction::Drop(files)) => assert!(files.is_empty()),
            other => panic!("drop expected: {:?}", other),
        }
        assert!(matches!(handle_drag_event(&drag_event("dragenter")), Some(DragAction::Enter)));
        assert!(matches!(handle_drag_event(&drag_event("dragleave")), Some(DragAction::Leave)));
    }

    #[wasm_bindgen_test]
    async fn test_drop_clears_dragging_highlight() {
        let parent = mount_point();
        let session = RwSignal::new(Session::default());
        let is_dragging = Signal::derive(move || session.with(|s| s.is_dragging()));

        let _mounted = leptos::mount::mount_to(parent.clone(), move || {
            view! {
                <UploadArea
                    is_dragging=is_dragging
                    on_drag_enter=move |_: ()| session.update(|s| s.drag_enter())
                    on_drag_leave=move |_: ()| session.update(|s| s.drag_leave())
                    on_drop={move |files: Vec<PendingFile>| {
                        session.update(|s| {
                            s.drop_files(files);
                        })
                    }}
                    on_select={move |files: Vec<PendingFile>| {
                        session.update(|s| {
                            s.add_files(files);
                        })
                    }}
                />
            }
        });

        let area: Element = parent
            .query_selector(".upload-area")
            .expect("セレクタ不正")
            .expect("アップロードエリアがない");

        let enter = drag_event("dragenter");
        area.dispatch_event(&enter).expect("dispatch失敗");
        next_tick().await;
        assert!(enter.default_prevented());
        assert!(session.with_untracked(|s| s.is_dragging()));
        assert!(area.class_list().contains("dragover"));

        let over = drag_event("dragover");
        area.dispatch_event(&over).expect("dispatch失敗");
        assert!(over.default_prevented());

        let drop = drag_event("drop");
        area.dispatch_event(&drop).expect("dispatch失敗");
        next_tick().await;
        assert!(drop.default_prevented());
        assert!(!session.with_untracked(|s| s.is_dragging()));
        assert!(!area.class_list().contains("dragover"));

        parent.remove();
    }
}
