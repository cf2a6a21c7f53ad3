//! ギャラリーコントローラ
//!
//! 絞り込み条件の唯一の保持者。状態の変更はすべて名前付きの操作を通し、
//! 各操作は再計算した [`GalleryView`] を返す。
//!
//! 位置データが読めなかった場合は検索のみのモードで動作し、
//! taluko / gaam の選択は [`Error::FiltersUnavailable`] になる。

use crate::document::DocumentSet;
use crate::display::{GalleryView, Statistics};
use crate::error::{Error, Result};
use crate::filter::{resolve, FilterState};
use crate::location::LocationIndex;

#[derive(Debug, Clone)]
pub struct GalleryController {
    documents: DocumentSet,
    locations: Option<LocationIndex>,
    state: FilterState,
    gaam_options: Vec<String>,
}

impl GalleryController {
    pub fn new(documents: DocumentSet, locations: Option<LocationIndex>) -> Self {
        let gaam_options = locations
            .as_ref()
            .map(|l| to_owned(l.gaams()))
            .unwrap_or_default();

        if locations.is_none() {
            tracing::warn!("Location data unavailable, filters disabled");
        }

        Self {
            documents,
            locations,
            state: FilterState::default(),
            gaam_options,
        }
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn locations(&self) -> Option<&LocationIndex> {
        self.locations.as_ref()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// 位置フィルタが使えるか
    pub fn filters_enabled(&self) -> bool {
        self.locations.is_some()
    }

    /// taluko の選択肢
    pub fn taluko_options(&self) -> Vec<String> {
        self.locations
            .as_ref()
            .map(|l| to_owned(l.talukos()))
            .unwrap_or_default()
    }

    /// 現在の gaam の選択肢
    pub fn gaam_options(&self) -> &[String] {
        &self.gaam_options
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::collect(&self.documents, self.locations.as_ref())
    }

    /// 現在の条件で表示状態を計算
    pub fn view(&self) -> GalleryView {
        let outcome = resolve(&self.state, &self.documents, self.locations.as_ref());
        GalleryView::build(
            &self.state,
            outcome,
            self.documents.len(),
            self.gaam_options.clone(),
        )
    }

    /// taluko を選択（None で解除）
    ///
    /// gaam の選択肢を taluko 配下に絞り、gaam の選択はリセットする
    pub fn select_taluko(&mut self, taluko: Option<&str>) -> Result<GalleryView> {
        let taluko = normalize(taluko);
        let locations = self.locations.as_ref().ok_or(Error::FiltersUnavailable)?;

        tracing::info!(
            "[Filter State] Taluko filter changed: \"{}\" -> \"{}\"",
            self.state.selected_taluko.as_deref().unwrap_or("none"),
            taluko.unwrap_or("none")
        );

        self.gaam_options = to_owned(locations.gaams_for(taluko));
        self.state.selected_taluko = taluko.map(str::to_string);
        self.state.selected_gaam = None;

        tracing::debug!(
            "[Dropdown] {} gaam options{}",
            self.gaam_options.len(),
            taluko
                .map(|t| format!(" in taluko \"{}\"", t))
                .unwrap_or_default()
        );

        Ok(self.view())
    }

    /// gaam を選択（None で解除）。taluko は変更しない
    pub fn select_gaam(&mut self, gaam: Option<&str>) -> Result<GalleryView> {
        let gaam = normalize(gaam);
        if self.locations.is_none() {
            return Err(Error::FiltersUnavailable);
        }

        tracing::info!(
            "[Filter State] Gaam filter changed: \"{}\" -> \"{}\"",
            self.state.selected_gaam.as_deref().unwrap_or("none"),
            gaam.unwrap_or("none")
        );

        self.state.selected_gaam = gaam.map(str::to_string);
        Ok(self.view())
    }

    /// 検索語を設定（小文字化して保持）
    pub fn set_search(&mut self, term: &str) -> GalleryView {
        self.state.set_search(term);
        self.view()
    }

    /// taluko / gaam を解除し、gaam の選択肢を全件に戻す
    pub fn clear_filters(&mut self) -> GalleryView {
        let had_filters = self.state.has_location_filter();
        self.state.selected_taluko = None;
        self.state.selected_gaam = None;
        self.gaam_options = self
            .locations
            .as_ref()
            .map(|l| to_owned(l.gaams()))
            .unwrap_or_default();

        tracing::info!(
            "[Filter State] All location filters cleared ({})",
            if had_filters { "filters were active" } else { "no filters were active" }
        );

        self.view()
    }

    /// 位置フィルタと検索語をすべて解除（空結果メッセージのリセット）
    pub fn clear_all(&mut self) -> GalleryView {
        self.state.search_term.clear();
        self.clear_filters()
    }
}

/// 空文字列の選択は未選択扱い（ドロップダウンのプレースホルダ）
fn normalize(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn to_owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}
