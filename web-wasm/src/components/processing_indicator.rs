//! 解析中表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ProcessingIndicator() -> impl IntoView {
    view! {
        <div class="processing">
            <div class="spinner"></div>
            <h3>"Processing Images..."</h3>
            <p class="text-muted">"This may take a few moments."</p>
        </div>
    }
}
