//! ギャラリーの読み込みと絞り込み（CLI用）
//!
//! ブラウザ版と同じコントローラを使い、結果をテキストで出力する。

use crate::error::{GalleryError, Result};
use p064_gallery_common::{
    Document, DocumentSet, GalleryConfig, GalleryController, GalleryView,
    LocationIndex, Statistics,
};
use std::path::Path;

/// 位置データを読み込む。読めなければ None（検索のみモード）
pub fn load_locations(path: &Path) -> Option<LocationIndex> {
    if !path.exists() {
        tracing::warn!(
            "位置データが見つかりません: {}（taluko / gaam フィルタは無効）",
            path.display()
        );
        return None;
    }

    match LocationIndex::from_path(path) {
        Ok(index) => Some(index),
        Err(e) => {
            tracing::warn!("位置データの読み込みに失敗: {} ({})", path.display(), e);
            None
        }
    }
}

/// 文書セットを生成し、位置データと合わせてコントローラを作る
pub fn open(config: &GalleryConfig, data_path: &Path) -> Result<GalleryController> {
    let documents = DocumentSet::generate(config)?;
    Ok(GalleryController::new(documents, load_locations(data_path)))
}

/// 絞り込み条件（CLI引数）
#[derive(Debug, Clone, Default)]
pub struct FilterRequest {
    pub taluko: Option<String>,
    pub gaam: Option<String>,
    pub search: Option<String>,
}

impl FilterRequest {
    pub fn has_location_filter(&self) -> bool {
        self.taluko.is_some() || self.gaam.is_some()
    }
}

/// ドロップダウン操作と同じ順序（検索語 → taluko → gaam）で条件を適用
pub fn apply_filters(
    controller: &mut GalleryController,
    request: &FilterRequest,
) -> Result<GalleryView> {
    if request.has_location_filter() && !controller.filters_enabled() {
        return Err(GalleryError::LocationDataRequired);
    }

    if let Some(search) = &request.search {
        controller.set_search(search);
    }
    if let Some(taluko) = &request.taluko {
        controller.select_taluko(Some(taluko.as_str()))?;
    }
    if let Some(gaam) = &request.gaam {
        controller.select_gaam(Some(gaam.as_str()))?;
    }

    Ok(controller.view())
}

/// 文書1件の表示行
pub fn document_line(doc: &Document) -> String {
    format!("{}\t{}\t{}\t{}", doc.id, doc.label, doc.image_path, doc.pdf_path)
}

/// 絞り込み結果のテキスト表現
pub fn render_view(view: &GalleryView, documents: &DocumentSet, count_only: bool) -> String {
    let mut lines = vec![view.result_text.clone()];

    if let Some(empty) = &view.empty_state {
        lines.push(String::new());
        lines.push(empty.to_text());
        return lines.join("\n");
    }

    if !count_only {
        lines.extend(
            view.visible
                .iter()
                .filter_map(|id| documents.get(id))
                .map(document_line),
        );
    }
    lines.join("\n")
}

/// 統計のテキスト表現
pub fn render_statistics(stats: &Statistics, generated_at: &str) -> String {
    let mut lines = vec![
        "統計:".to_string(),
        format!("  文書数: {}", stats.total_documents),
    ];

    match &stats.location {
        Some(location) => {
            lines.push(format!("  位置データあり: {}", location.documents_with_location));
            lines.push(format!("  位置データ不完全: {}", location.incomplete));
            lines.push(format!("  Filters: {}", location.summary()));
        }
        None => lines.push("  位置データ: なし（フィルタ無効）".to_string()),
    }

    lines.push(format!("  Last updated: {}", generated_at));
    lines.join("\n")
}
