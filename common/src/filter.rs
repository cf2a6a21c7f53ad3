//! 絞り込み（位置フィルタ + テキスト検索）
//!
//! 1. taluko / gaam のどちらかが選択されていれば位置データで絞り込む
//! 2. 検索語があればファイル名・表示ラベルの部分一致で絞り込む
//!
//! 結果は常に文書セットの元の順序を保つ。

use serde::{Deserialize, Serialize};

use crate::document::DocumentSet;
use crate::location::LocationIndex;

/// 絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub selected_taluko: Option<String>,
    pub selected_gaam: Option<String>,
    /// 小文字化済みの検索語
    pub search_term: String,
}

impl FilterState {
    /// 位置フィルタが有効か
    pub fn has_location_filter(&self) -> bool {
        self.selected_taluko.is_some() || self.selected_gaam.is_some()
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// いずれかのフィルタが有効か
    pub fn is_active(&self) -> bool {
        self.has_location_filter() || self.has_search()
    }

    /// 検索語を小文字化して設定
    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
    }
}

/// 絞り込み結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// 一致した文書ID（元の順序）
    pub matched: Vec<String>,
    /// 位置フィルタ後の件数
    pub after_location: usize,
    /// 位置データなしで除外した件数
    pub missing_location: usize,
}

impl FilterOutcome {
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}

/// 絞り込みを実行
///
/// `locations` が None のとき位置フィルタは「位置データなし」として扱い、
/// 位置フィルタが選択されていれば全件除外する。
pub fn resolve(
    state: &FilterState,
    documents: &DocumentSet,
    locations: Option<&LocationIndex>,
) -> FilterOutcome {
    let taluko = state.selected_taluko.as_deref();
    let gaam = state.selected_gaam.as_deref();

    tracing::debug!(
        "[Filter] Active filters: taluko={} gaam={} search={}",
        taluko.unwrap_or("none"),
        gaam.unwrap_or("none"),
        if state.has_search() { state.search_term.as_str() } else { "none" }
    );

    let mut missing_location = 0;

    // Step 1: 位置フィルタ
    let mut filtered: Vec<_> = if state.has_location_filter() {
        let kept: Vec<_> = documents
            .iter()
            .filter(|doc| match locations.and_then(|l| l.get(&doc.id)) {
                Some(entry) => entry.matches(taluko, gaam),
                None => {
                    missing_location += 1;
                    false
                }
            })
            .collect();

        tracing::debug!(
            "[Filter] Location filters applied: {} images match{}{}",
            kept.len(),
            taluko.map(|t| format!(" taluko=\"{}\"", t)).unwrap_or_default(),
            gaam.map(|g| format!(" gaam=\"{}\"", g)).unwrap_or_default()
        );
        if missing_location > 0 {
            tracing::debug!(
                "[Filter] {} documents excluded due to missing location data",
                missing_location
            );
        }
        kept
    } else {
        documents.iter().collect()
    };

    let after_location = filtered.len();

    // Step 2: テキスト検索
    if state.has_search() {
        filtered.retain(|doc| doc.matches_search(&state.search_term));
        tracing::debug!(
            "[Filter] Search filter applied: {} of {} images match term=\"{}\"",
            filtered.len(),
            after_location,
            state.search_term
        );
    }

    tracing::debug!(
        "[Filter] Final result: {} of {} images displayed",
        filtered.len(),
        documents.len()
    );

    FilterOutcome {
        matched: filtered.into_iter().map(|doc| doc.id.clone()).collect(),
        after_location,
        missing_location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::location::LocationEntry;

    fn documents() -> DocumentSet {
        DocumentSet::generate(&GalleryConfig::default()).unwrap()
    }

    fn locations() -> LocationIndex {
        let mut index = LocationIndex::default();
        index.insert("P0640001".into(), LocationEntry::new(Some("Anand"), Some("Vasad")));
        index.insert("P0640002".into(), LocationEntry::new(Some("Anand"), Some("Bakrol")));
        index.insert("P0640010".into(), LocationEntry::new(Some("Anand"), Some("Vasad")));
        index.insert("P0640003".into(), LocationEntry::new(Some("Borsad"), Some("Bochasan")));
        index.insert("P0640004".into(), LocationEntry::new(Some("Borsad"), None));
        index
    }

    fn state(taluko: Option<&str>, gaam: Option<&str>, search: &str) -> FilterState {
        let mut state = FilterState {
            selected_taluko: taluko.map(str::to_string),
            selected_gaam: gaam.map(str::to_string),
            ..Default::default()
        };
        state.set_search(search);
        state
    }

    #[test]
    fn test_no_filters_returns_full_set_in_order() {
        let docs = documents();
        let outcome = resolve(&FilterState::default(), &docs, Some(&locations()));
        assert_eq!(outcome.matched, docs.ids());
        assert_eq!(outcome.missing_location, 0);
    }

    #[test]
    fn test_no_filters_without_location_data() {
        let docs = documents();
        let outcome = resolve(&FilterState::default(), &docs, None);
        assert_eq!(outcome.len(), 601);
    }

    #[test]
    fn test_taluko_and_gaam_are_anded() {
        let docs = documents();
        let outcome = resolve(&state(Some("Anand"), Some("Vasad"), ""), &docs, Some(&locations()));
        assert_eq!(outcome.matched, vec!["P0640001", "P0640010"]);
    }

    #[test]
    fn test_documents_without_entry_are_excluded() {
        let docs = documents();
        let outcome = resolve(&state(Some("Anand"), None, ""), &docs, Some(&locations()));
        assert_eq!(outcome.matched, vec!["P0640001", "P0640002", "P0640010"]);
        assert_eq!(outcome.missing_location, 601 - 5);
    }

    #[test]
    fn test_gaam_only_filter() {
        let docs = documents();
        let outcome = resolve(&state(None, Some("Bochasan"), ""), &docs, Some(&locations()));
        assert_eq!(outcome.matched, vec!["P0640003"]);
    }

    #[test]
    fn test_absent_field_is_non_match() {
        let docs = documents();
        let outcome = resolve(&state(Some("Borsad"), Some("Bochasan"), ""), &docs, Some(&locations()));
        assert_eq!(outcome.matched, vec!["P0640003"]);

        let outcome = resolve(&state(Some("Borsad"), None, ""), &docs, Some(&locations()));
        assert_eq!(outcome.matched, vec!["P0640003", "P0640004"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let docs = documents();
        let outcome = resolve(&state(None, None, "0001"), &docs, None);
        assert_eq!(outcome.matched, vec!["P0640001"]);

        let outcome = resolve(&state(None, None, "p06400"), &docs, None);
        assert_eq!(outcome.len(), 99);
    }

    #[test]
    fn test_search_matches_display_label() {
        let docs = documents();
        let outcome = resolve(&state(None, None, "ZIP/P064/P0640600"), &docs, None);
        assert_eq!(outcome.matched, vec!["P0640600"]);
    }

    #[test]
    fn test_location_then_search_stage_counts() {
        let docs = documents();
        let outcome = resolve(&state(Some("Anand"), None, "0010"), &docs, Some(&locations()));
        assert_eq!(outcome.after_location, 3);
        assert_eq!(outcome.matched, vec!["P0640010"]);
    }

    #[test]
    fn test_location_filter_without_data_excludes_everything() {
        let docs = documents();
        let outcome = resolve(&state(Some("Anand"), None, ""), &docs, None);
        assert!(outcome.is_empty());
        assert_eq!(outcome.missing_location, 601);
    }

    #[test]
    fn test_filter_state_activity() {
        let mut s = FilterState::default();
        assert!(!s.is_active());
        s.set_search("ABC");
        assert_eq!(s.search_term, "abc");
        assert!(s.is_active());
        assert!(!s.has_location_filter());
    }
}
