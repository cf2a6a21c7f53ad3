//! P064 Document Gallery (Leptos + WASM)

mod api;
mod app;
mod bindings;
pub mod components;
mod logging;
mod pdf;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    // マウント先がなければ以降のセットアップは行わない
    let has_body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .is_some();
    if !has_body {
        tracing::error!("[Init] Gallery initialization failed: document body not found");
        return;
    }

    leptos::mount::mount_to_body(app::App);
}
