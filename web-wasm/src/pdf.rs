//! PDFを新しいタブで開く

const OPEN_FEATURES: &str = "noopener,noreferrer";

/// PDFを別タブで開く。失敗時（ポップアップブロック等）はアラートを表示
pub fn open_pdf(pdf_path: &str) {
    let result = web_sys::window()
        .ok_or_else(|| "window is not available".to_string())
        .and_then(|window| {
            window
                .open_with_url_and_target_and_features(pdf_path, "_blank", OPEN_FEATURES)
                .map_err(|e| format!("{:?}", e))
        });

    if let Err(e) = result {
        tracing::error!("Failed to open PDF: {} ({})", pdf_path, e);
        gloo::dialogs::alert("Unable to open PDF. The file may not exist.");
    }
}
