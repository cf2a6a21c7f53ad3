//! 検索・位置フィルタコンポーネント

use leptos::prelude::*;

const UNAVAILABLE: &str = "Location data unavailable";

#[component]
pub fn SearchBox<FS, FC>(
    search_text: RwSignal<String>,
    on_search: FS,
    on_clear_search: FC,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="search-container">
            <input
                type="search"
                id="search-input"
                placeholder="Search by document number..."
                prop:value=move || search_text.get()
                on:input={
                    let on_search = on_search.clone();
                    move |ev| on_search(event_target_value(&ev))
                }
            />
            <button
                class="clear-button"
                id="clear-search"
                aria-label="Clear search"
                on:click={
                    let on_clear_search = on_clear_search.clone();
                    move |_| on_clear_search(())
                }
            >
                "✕"
            </button>
        </div>
    }
}

#[component]
pub fn FilterBar<FT, FG, FC>(
    filters_enabled: bool,
    load_error: Option<String>,
    taluko_options: Vec<String>,
    gaam_options: RwSignal<Vec<String>>,
    selected_taluko: RwSignal<String>,
    selected_gaam: RwSignal<String>,
    taluko_active: RwSignal<bool>,
    gaam_active: RwSignal<bool>,
    on_taluko_change: FT,
    on_gaam_change: FG,
    on_clear_filters: FC,
) -> impl IntoView
where
    FT: Fn(String) + 'static + Clone + Send + Sync,
    FG: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let (notice_open, set_notice_open) = signal(load_error.is_some());
    if let Some(error) = &load_error {
        tracing::warn!("[Location Data] Filter UI disabled due to loading failure: {}", error);
    }

    let taluko_placeholder = if filters_enabled { "Select Taluko" } else { UNAVAILABLE };
    let gaam_placeholder = if filters_enabled { "Select Gaam" } else { UNAVAILABLE };

    view! {
        <div
            class="filter-container"
            class:has-active-filters=move || taluko_active.get() || gaam_active.get()
            class:filter-error=!filters_enabled
        >
            <select
                id="taluko-filter"
                class:filter-active=move || taluko_active.get()
                class:filter-disabled=!filters_enabled
                disabled=!filters_enabled
                on:change={
                    let on_taluko_change = on_taluko_change.clone();
                    move |ev| on_taluko_change(event_target_value(&ev))
                }
            >
                <option value="" prop:selected=move || selected_taluko.get().is_empty()>
                    {taluko_placeholder}
                </option>
                {taluko_options
                    .into_iter()
                    .map(|taluko| {
                        let value = taluko.clone();
                        let label = taluko.clone();
                        view! {
                            <option value=value prop:selected=move || selected_taluko.get() == taluko>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <select
                id="gaam-filter"
                class:filter-active=move || gaam_active.get()
                class:filter-disabled=!filters_enabled
                disabled=!filters_enabled
                on:change={
                    let on_gaam_change = on_gaam_change.clone();
                    move |ev| on_gaam_change(event_target_value(&ev))
                }
            >
                <option value="" prop:selected=move || selected_gaam.get().is_empty()>
                    {gaam_placeholder}
                </option>
                <For
                    each=move || gaam_options.get()
                    key=|gaam| gaam.clone()
                    children=move |gaam: String| {
                        let value = gaam.clone();
                        let label = gaam.clone();
                        view! {
                            <option value=value prop:selected=move || selected_gaam.get() == gaam>
                                {label}
                            </option>
                        }
                    }
                />
            </select>

            <button
                class="btn btn-secondary btn-small"
                id="clear-filters"
                class:filter-disabled=!filters_enabled
                disabled=!filters_enabled
                on:click={
                    let on_clear_filters = on_clear_filters.clone();
                    move |_| on_clear_filters(())
                }
            >
                "Clear filters"
            </button>

            <Show when=move || notice_open.get()>
                <div class="filter-error-message" role="alert">
                    <span class="error-icon">"⚠️"</span>
                    <span class="error-text">
                        "Location filters unavailable. Gallery search still works."
                    </span>
                    <button
                        class="notice-dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| set_notice_open.set(false)
                    >
                        "✕"
                    </button>
                </div>
            </Show>
        </div>
    }
}
