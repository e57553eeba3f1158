//! 解析結果ギャラリーコンポーネント

use leptos::prelude::*;
use photo_annotator_common::AnnotationResult;

// 検出枠は画像の表示領域に対するパーセントで配置する
const IMAGE_BOX_STYLE: &str = "position: relative; overflow: hidden;";
const IMAGE_STYLE: &str = "display: block; width: 100%; height: 16rem; object-fit: cover;";
const BBOX_STYLE: &str = "position: absolute; border: 2px solid #3b82f6; background: rgba(59, 130, 246, 0.2); ";

#[component]
pub fn ResultsGallery<FR>(results: Signal<Vec<AnnotationResult>>, on_reset: FR) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="results">
            <div class="results-header">
                <h3>"Analysis Results"</h3>
                <button class="btn btn-secondary" on:click=move |_| on_reset(())>
                    "Upload New Images"
                </button>
            </div>

            <div class="results-grid">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|result| view! { <ResultCard result=result /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ResultCard(result: AnnotationResult) -> impl IntoView {
    let boxes = result
        .boxes
        .iter()
        .map(|bbox| {
            view! {
                <div class="bbox" style=format!("{}{}", BBOX_STYLE, bbox.css_position())>
                    <span class="bbox-label">{bbox.label.clone()}</span>
                </div>
            }
        })
        .collect_view();

    let tags = result
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();

    view! {
        <div class="result-card">
            <div class="result-image" style=IMAGE_BOX_STYLE>
                <img src=result.preview_url().to_string() alt=result.name.clone() style=IMAGE_STYLE />
                {boxes}
            </div>
            <div class="result-body">
                <h4>{result.name.clone()}</h4>
                <div class="tags">{tags}</div>
                <p class="text-muted">{result.detected_label()}</p>
            </div>
        </div>
    }
}
