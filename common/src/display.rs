//! 表示状態
//!
//! 絞り込み結果から件数表示・空結果メッセージ・統計を組み立てる。
//! DOM操作は [`GalleryBindings`] 経由で行い、ここではDOMに触れない。

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::document::DocumentSet;
use crate::filter::{FilterOutcome, FilterState};
use crate::location::LocationIndex;

/// 有効なフィルタ1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ActiveFilter {
    Taluko(String),
    Gaam(String),
    Search(String),
}

impl ActiveFilter {
    /// 件数表示用（taluko: Anand）
    pub fn summary(&self) -> String {
        match self {
            ActiveFilter::Taluko(v) => format!("taluko: {}", v),
            ActiveFilter::Gaam(v) => format!("gaam: {}", v),
            ActiveFilter::Search(v) => format!("search: \"{}\"", v),
        }
    }

    /// 空結果メッセージ用の見出し
    pub fn label(&self) -> &'static str {
        match self {
            ActiveFilter::Taluko(_) => "Taluko",
            ActiveFilter::Gaam(_) => "Gaam",
            ActiveFilter::Search(_) => "Search",
        }
    }

    /// 空結果メッセージ用の値（検索語は引用符付き）
    pub fn value(&self) -> String {
        match self {
            ActiveFilter::Taluko(v) | ActiveFilter::Gaam(v) => v.clone(),
            ActiveFilter::Search(v) => format!("\"{}\"", v),
        }
    }
}

/// 有効なフィルタを taluko → gaam → search の順で列挙
pub fn active_filters(state: &FilterState) -> Vec<ActiveFilter> {
    let mut filters = Vec::new();
    if let Some(t) = &state.selected_taluko {
        filters.push(ActiveFilter::Taluko(t.clone()));
    }
    if let Some(g) = &state.selected_gaam {
        filters.push(ActiveFilter::Gaam(g.clone()));
    }
    if state.has_search() {
        filters.push(ActiveFilter::Search(state.search_term.clone()));
    }
    filters
}

/// "(filtered by taluko: X, gaam: Y, search: "z")"。フィルタなしなら空文字列
pub fn active_filter_info(filters: &[ActiveFilter]) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let parts: Vec<_> = filters.iter().map(ActiveFilter::summary).collect();
    format!("(filtered by {})", parts.join(", "))
}

/// "N results" / "1 result"
pub fn result_count_text(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", count)
    }
}

/// 空結果メッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {
    /// 0件になった原因のフィルタ
    pub filters: Vec<ActiveFilter>,
}

impl EmptyState {
    pub const TITLE: &'static str = "No results found";
    pub const INTRO: &'static str = "No documents match the following filters:";
    pub const RESET_HINT: &'static str = "Try adjusting your filters or clear all filters to see more results.";
    pub const RESET_LABEL: &'static str = "clear all filters";

    /// プレーンテキスト表現（CLI出力用）
    pub fn to_text(&self) -> String {
        let mut lines = vec![Self::TITLE.to_string(), Self::INTRO.to_string()];
        for filter in &self.filters {
            lines.push(format!("  - {}: {}", filter.label(), filter.value()));
        }
        lines.push(Self::RESET_HINT.to_string());
        lines.join("\n")
    }
}

/// 絞り込み後の表示状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    /// 表示する文書ID（元の順序）
    pub visible: Vec<String>,
    /// 全文書数
    pub total: usize,
    /// 件数表示（"3 results (filtered by taluko: Anand)"）
    pub result_text: String,
    /// フィルタが有効か（件数表示のハイライト）
    pub has_filters: bool,
    pub taluko_active: bool,
    pub gaam_active: bool,
    /// 現在の taluko に対応する gaam の選択肢
    pub gaam_options: Vec<String>,
    /// 0件かつフィルタ有効時のみ Some
    pub empty_state: Option<EmptyState>,
}

impl GalleryView {
    /// 絞り込み結果から表示状態を組み立てる
    pub fn build(
        state: &FilterState,
        outcome: FilterOutcome,
        total: usize,
        gaam_options: Vec<String>,
    ) -> Self {
        let filters = active_filters(state);
        let info = active_filter_info(&filters);

        let mut result_text = result_count_text(outcome.len());
        if !info.is_empty() {
            result_text.push(' ');
            result_text.push_str(&info);
        }

        let empty_state = if outcome.is_empty() && !filters.is_empty() {
            Some(EmptyState {
                filters: filters.clone(),
            })
        } else {
            None
        };

        Self {
            visible: outcome.matched,
            total,
            result_text,
            has_filters: !filters.is_empty(),
            taluko_active: state.selected_taluko.is_some(),
            gaam_active: state.selected_gaam.is_some(),
            gaam_options,
            empty_state,
        }
    }

    pub fn count(&self) -> usize {
        self.visible.len()
    }
}

/// 表示先（DOMや端末）への書き込み口
///
/// ブラウザではシグナル、テストでは記録用の実装を注入する
pub trait GalleryBindings {
    /// カードの表示/非表示を切り替える（カードは初期化時に一度だけ生成済み）
    fn set_card_visible(&mut self, doc_id: &str, visible: bool);
    /// 件数表示を更新
    fn set_result_count(&mut self, text: &str, has_filters: bool);
    /// 空結果メッセージを表示（None で非表示）
    fn set_empty_state(&mut self, empty: Option<&EmptyState>);
    /// gaam の選択肢を差し替える
    fn set_gaam_options(&mut self, options: &[String]);
    /// ドロップダウンの選択中ハイライト
    fn set_filter_highlight(&mut self, taluko_active: bool, gaam_active: bool);
}

/// 表示状態をバインディングへ反映
pub fn sync_display<B: GalleryBindings + ?Sized>(
    view: &GalleryView,
    documents: &DocumentSet,
    bindings: &mut B,
) {
    let visible: HashSet<&str> = view.visible.iter().map(String::as_str).collect();
    for doc in documents {
        bindings.set_card_visible(&doc.id, visible.contains(doc.id.as_str()));
    }

    bindings.set_result_count(&view.result_text, view.has_filters);
    bindings.set_empty_state(view.empty_state.as_ref());
    bindings.set_gaam_options(&view.gaam_options);
    bindings.set_filter_highlight(view.taluko_active, view.gaam_active);

    tracing::debug!("[Display] Gallery updated: {} cards visible", visible.len());
}

/// ヘッダーに表示する統計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_documents: usize,
    /// 位置データが読めなかった場合は None
    pub location: Option<LocationStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStatistics {
    pub documents_with_location: usize,
    pub incomplete: usize,
    pub talukos: usize,
    pub gaams: usize,
}

impl Statistics {
    /// 位置データが読めていれば空でも `location` は Some
    pub fn collect(documents: &DocumentSet, locations: Option<&LocationIndex>) -> Self {
        let location = locations.map(|l| LocationStatistics {
            documents_with_location: l.len(),
            incomplete: l.incomplete_count(),
            talukos: l.talukos().len(),
            gaams: l.gaams().len(),
        });
        Self {
            total_documents: documents.len(),
            location,
        }
    }

    /// "12 talukos, 340 gaams"。位置情報を持つ文書がなければ None
    pub fn filter_summary(&self) -> Option<String> {
        self.location
            .as_ref()
            .filter(|l| l.documents_with_location > 0)
            .map(LocationStatistics::summary)
    }
}

impl LocationStatistics {
    pub fn summary(&self) -> String {
        format!("{} talukos, {} gaams", self.talukos, self.gaams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::location::LocationEntry;

    fn outcome(ids: &[&str]) -> FilterOutcome {
        FilterOutcome {
            matched: ids.iter().map(|s| s.to_string()).collect(),
            after_location: ids.len(),
            missing_location: 0,
        }
    }

    #[test]
    fn test_result_count_text() {
        assert_eq!(result_count_text(0), "0 results");
        assert_eq!(result_count_text(1), "1 result");
        assert_eq!(result_count_text(601), "601 results");
    }

    #[test]
    fn test_active_filter_info() {
        let state = FilterState {
            selected_taluko: Some("Anand".into()),
            selected_gaam: None,
            search_term: "0001".into(),
        };
        let info = active_filter_info(&active_filters(&state));
        assert_eq!(info, "(filtered by taluko: Anand, search: \"0001\")");
        assert_eq!(active_filter_info(&[]), "");
    }

    #[test]
    fn test_view_without_filters() {
        let view = GalleryView::build(&FilterState::default(), outcome(&["P0640001", "P0640002"]), 2, vec![]);
        assert_eq!(view.result_text, "2 results");
        assert!(!view.has_filters);
        assert!(view.empty_state.is_none());
    }

    #[test]
    fn test_empty_view_names_active_filters() {
        let state = FilterState {
            selected_taluko: Some("Borsad".into()),
            selected_gaam: Some("Anklav".into()),
            search_term: String::new(),
        };
        let view = GalleryView::build(&state, outcome(&[]), 601, vec![]);
        assert_eq!(view.result_text, "0 results (filtered by taluko: Borsad, gaam: Anklav)");
        let empty = view.empty_state.unwrap();
        assert_eq!(
            empty.filters,
            vec![ActiveFilter::Taluko("Borsad".into()), ActiveFilter::Gaam("Anklav".into())]
        );
        let text = empty.to_text();
        assert!(text.contains("Taluko: Borsad"));
        assert!(text.contains("Gaam: Anklav"));
        assert!(text.contains(EmptyState::RESET_LABEL));
    }

    #[test]
    fn test_search_value_is_quoted() {
        let filter = ActiveFilter::Search("abc".into());
        assert_eq!(filter.value(), "\"abc\"");
        assert_eq!(filter.summary(), "search: \"abc\"");
    }

    #[derive(Default)]
    struct Recorder {
        visible: Vec<(String, bool)>,
        count: Option<(String, bool)>,
        empty: Option<Option<EmptyState>>,
        gaams: Vec<String>,
        highlight: Option<(bool, bool)>,
    }

    impl GalleryBindings for Recorder {
        fn set_card_visible(&mut self, doc_id: &str, visible: bool) {
            self.visible.push((doc_id.to_string(), visible));
        }
        fn set_result_count(&mut self, text: &str, has_filters: bool) {
            self.count = Some((text.to_string(), has_filters));
        }
        fn set_empty_state(&mut self, empty: Option<&EmptyState>) {
            self.empty = Some(empty.cloned());
        }
        fn set_gaam_options(&mut self, options: &[String]) {
            self.gaams = options.to_vec();
        }
        fn set_filter_highlight(&mut self, taluko_active: bool, gaam_active: bool) {
            self.highlight = Some((taluko_active, gaam_active));
        }
    }

    #[test]
    fn test_sync_display_toggles_every_card() {
        let documents = DocumentSet::generate(&GalleryConfig::default()).unwrap();
        let state = FilterState {
            selected_taluko: Some("Anand".into()),
            ..Default::default()
        };
        let view = GalleryView::build(&state, outcome(&["P0640002"]), 601, vec!["Vasad".into()]);

        let mut recorder = Recorder::default();
        sync_display(&view, &documents, &mut recorder);

        assert_eq!(recorder.visible.len(), 601);
        let shown: Vec<_> = recorder.visible.iter().filter(|(_, v)| *v).collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, "P0640002");
        assert_eq!(
            recorder.count,
            Some(("1 result (filtered by taluko: Anand)".to_string(), true))
        );
        assert_eq!(recorder.empty, Some(None));
        assert_eq!(recorder.gaams, vec!["Vasad".to_string()]);
        assert_eq!(recorder.highlight, Some((true, false)));
    }

    #[test]
    fn test_statistics() {
        let documents = DocumentSet::generate(&GalleryConfig::default()).unwrap();
        let mut index = LocationIndex::default();
        index.insert("P0640001".into(), LocationEntry::new(Some("Anand"), Some("Vasad")));
        index.insert("P0640002".into(), LocationEntry::new(Some("Borsad"), None));

        let stats = Statistics::collect(&documents, Some(&index));
        assert_eq!(stats.total_documents, 601);
        assert_eq!(stats.filter_summary().as_deref(), Some("2 talukos, 1 gaams"));
        assert_eq!(stats.location.as_ref().unwrap().incomplete, 1);

        let stats = Statistics::collect(&documents, None);
        assert!(stats.filter_summary().is_none());
    }

    #[test]
    fn test_statistics_with_empty_index() {
        let documents = DocumentSet::generate(&GalleryConfig::default()).unwrap();
        let index = LocationIndex::from_json_str("{}").unwrap();

        let stats = Statistics::collect(&documents, Some(&index));
        let location = stats.location.as_ref().unwrap();
        assert_eq!(location.documents_with_location, 0);
        assert_eq!(location.summary(), "0 talukos, 0 gaams");
        assert!(stats.filter_summary().is_none());
    }
}
