//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-container" id="loading">
            <div class="spinner" />
            <p class="loading-text">"Loading gallery..."</p>
        </div>
    }
}
