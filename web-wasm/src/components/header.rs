//! ヘッダーコンポーネント（統計表示）

use leptos::prelude::*;
use p064_gallery_common::Statistics;

#[component]
pub fn Header(statistics: Statistics, last_updated: String) -> impl IntoView {
    let filter_summary = statistics.filter_summary();

    view! {
        <header class="header">
            <h1>"P064 Document Gallery"</h1>
            <div class="stats-container">
                <div class="stat-item">
                    <span class="stat-label">"Documents:"</span>
                    <span class="stat-value" id="total-documents">{statistics.total_documents}</span>
                </div>
                <div class="stat-item">
                    <span class="stat-label">"Last updated:"</span>
                    <span class="stat-value" id="last-updated">{last_updated}</span>
                </div>
                {filter_summary.map(|summary| view! {
                    <div class="stat-item" id="filter-stats">
                        <span class="stat-label">"Filters:"</span>
                        <span class="stat-value">{summary}</span>
                    </div>
                })}
            </div>
        </header>
    }
}
