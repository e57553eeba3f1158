//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Instant Image Analysis"</h1>
            <p class="text-muted">
                "Upload single or multiple images to get instant object detection, segmentation, and classification."
            </p>
        </header>
    }
}
