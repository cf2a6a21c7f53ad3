//! メインアプリケーションコンポーネント

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use p064_gallery_common::{
    sync_display, DocumentSet, GalleryConfig, GalleryController, GalleryView, LocationIndex,
};
use wasm_bindgen::JsValue;

use crate::api::fetch_location_data;
use crate::bindings::SignalBindings;
use crate::components::{
    filter_bar::{FilterBar, SearchBox},
    gallery_grid::GalleryGrid,
    header::Header,
    loading::Loading,
    no_results::NoResults,
};

const FATAL_MESSAGE: &str = "Unable to load gallery. Please refresh the page.";

/// 位置データの読込結果
#[derive(Clone)]
struct LocationLoad {
    locations: Option<LocationIndex>,
    error: Option<String>,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = GalleryConfig::default();
    tracing::info!("[Init] Starting gallery initialization...");

    let documents = match DocumentSet::generate(&config) {
        Ok(documents) => documents,
        Err(e) => {
            tracing::error!("[Init] Gallery initialization failed: {}", e);
            return view! {
                <div class="container">
                    <div class="no-results">{FATAL_MESSAGE}</div>
                </div>
            }
            .into_any();
        }
    };

    // 位置データは起動時に一度だけ取得
    let (location_load, set_location_load) = signal(None::<LocationLoad>);
    let data_path = config.data_path.clone();
    spawn_local(async move {
        let load = match fetch_location_data(&data_path).await {
            Ok(locations) => LocationLoad {
                locations: Some(locations),
                error: None,
            },
            Err(e) => {
                tracing::error!("[Location Data] Failed to load: {}", e);
                LocationLoad {
                    locations: None,
                    error: Some(e),
                }
            }
        };
        set_location_load.set(Some(load));
    });

    let debounce_ms = config.search_debounce_ms;

    view! {
        <div class="container">
            {move || match location_load.get() {
                None => view! { <Loading /> }.into_any(),
                Some(load) => view! {
                    <Gallery
                        documents=documents.clone()
                        locations=load.locations
                        load_error=load.error
                        debounce_ms=debounce_ms
                    />
                }
                .into_any(),
            }}
        </div>
    }
    .into_any()
}

#[component]
fn Gallery(
    documents: DocumentSet,
    locations: Option<LocationIndex>,
    load_error: Option<String>,
    debounce_ms: u32,
) -> impl IntoView {
    let (mut bindings, cards) = SignalBindings::new(documents.iter());
    let controller = GalleryController::new(documents, locations);

    let statistics = controller.statistics();
    let filters_enabled = controller.filters_enabled();
    let taluko_options = controller.taluko_options();
    sync_display(&controller.view(), controller.documents(), &mut bindings);

    let result_text = bindings.result_text;
    let has_filters = bindings.has_filters;
    let empty_state = bindings.empty_state;
    let gaam_options = bindings.gaam_options;
    let taluko_active = bindings.taluko_active;
    let gaam_active = bindings.gaam_active;

    let controller = StoredValue::new(controller);
    let bindings = StoredValue::new(bindings);
    let pending_search = StoredValue::new_local(None::<Timeout>);

    let search_text = RwSignal::new(String::new());
    let selected_taluko = RwSignal::new(String::new());
    let selected_gaam = RwSignal::new(String::new());

    let last_updated = String::from(
        js_sys::Date::new_0().to_locale_string("en-US", &JsValue::UNDEFINED),
    );

    // 表示状態をシグナルへ反映
    let apply = move |view: GalleryView| {
        controller.with_value(|c| {
            bindings.update_value(|b| sync_display(&view, c.documents(), b));
        });
    };

    // 検索入力（デバウンス）
    let on_search = move |value: String| {
        search_text.set(value.clone());
        let timeout = Timeout::new(debounce_ms, move || {
            if let Some(view) = controller.try_update_value(|c| c.set_search(&value)) {
                apply(view);
            }
        });
        // 前回のタイマーは drop でキャンセルされる
        pending_search.set_value(Some(timeout));
    };

    let on_clear_search = move |_: ()| {
        pending_search.set_value(None);
        search_text.set(String::new());
        if let Some(view) = controller.try_update_value(|c| c.set_search("")) {
            apply(view);
        }
    };

    let on_taluko_change = move |value: String| {
        match controller.try_update_value(|c| c.select_taluko(Some(value.as_str()))) {
            Some(Ok(view)) => {
                selected_taluko.set(value);
                selected_gaam.set(String::new());
                apply(view);
            }
            Some(Err(e)) => tracing::warn!("[Filter] {}", e),
            None => {}
        }
    };

    let on_gaam_change = move |value: String| {
        match controller.try_update_value(|c| c.select_gaam(Some(value.as_str()))) {
            Some(Ok(view)) => {
                selected_gaam.set(value);
                apply(view);
            }
            Some(Err(e)) => tracing::warn!("[Filter] {}", e),
            None => {}
        }
    };

    let on_clear_filters = move |_: ()| {
        selected_taluko.set(String::new());
        selected_gaam.set(String::new());
        if let Some(view) = controller.try_update_value(|c| c.clear_filters()) {
            apply(view);
        }
    };

    // 空結果メッセージからの一括リセット（検索語も消す）
    let on_clear_all = move |_: ()| {
        pending_search.set_value(None);
        search_text.set(String::new());
        selected_taluko.set(String::new());
        selected_gaam.set(String::new());
        if let Some(view) = controller.try_update_value(|c| c.clear_all()) {
            tracing::info!("[Display] All filters cleared via inline button");
            apply(view);
        }
    };

    tracing::info!("[Init] Gallery initialization complete!");

    view! {
        <Header statistics=statistics last_updated=last_updated />

        <div class="controls">
            <SearchBox
                search_text=search_text
                on_search=on_search
                on_clear_search=on_clear_search
            />
            <FilterBar
                filters_enabled=filters_enabled
                load_error=load_error
                taluko_options=taluko_options
                gaam_options=gaam_options
                selected_taluko=selected_taluko
                selected_gaam=selected_gaam
                taluko_active=taluko_active
                gaam_active=gaam_active
                on_taluko_change=on_taluko_change
                on_gaam_change=on_gaam_change
                on_clear_filters=on_clear_filters
            />
        </div>

        <p
            class="result-count"
            id="result-count"
            class:has-filters=move || has_filters.get()
        >
            {move || result_text.get()}
        </p>

        <NoResults empty_state=empty_state on_clear_all=on_clear_all />

        <GalleryGrid cards=cards />
    }
}
