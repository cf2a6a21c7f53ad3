//! 位置データ（extracted_data.json）の取得

use p064_gallery_common::LocationIndex;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 位置データを取得してインデックスを構築
///
/// 取得失敗・不正な形式はエラー文字列で返す（呼び出し側で検索のみモードに切り替える）
pub async fn fetch_location_data(url: &str) -> Result<LocationIndex, String> {
    tracing::info!("[Location Data] Loading from {}...", url);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or("window is not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(format!(
            "Failed to fetch location data: {} {}",
            resp.status(),
            resp.status_text()
        ));
    }

    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = body
        .as_string()
        .ok_or("location data response is not text")?;

    LocationIndex::from_json_str(&body).map_err(|e| e.to_string())
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
