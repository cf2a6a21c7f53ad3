//! 空結果メッセージコンポーネント

use leptos::prelude::*;
use p064_gallery_common::EmptyState;

#[component]
pub fn NoResults<FC>(empty_state: RwSignal<Option<EmptyState>>, on_clear_all: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || empty_state.with(Option::is_some)>
            <div class="no-results" id="no-results">
                <p><strong>{EmptyState::TITLE}</strong></p>
                <p>{EmptyState::INTRO}</p>
                <ul class="filter-list">
                    {move || {
                        empty_state
                            .get()
                            .map(|empty| empty.filters)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <li>{format!("{}: ", filter.label())}<em>{filter.value()}</em></li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <p>
                    "Try adjusting your filters or "
                    <button
                        class="inline-clear-button"
                        id="clear-all-filters-inline"
                        on:click={
                            let on_clear_all = on_clear_all.clone();
                            move |_| on_clear_all(())
                        }
                    >
                        {EmptyState::RESET_LABEL}
                    </button>
                    " to see more results."
                </p>
            </div>
        </Show>
    }
}
