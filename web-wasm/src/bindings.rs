//! シグナルによる表示バインディング
//!
//! コントローラが返した表示状態を Leptos のシグナルへ書き込む。
//! カードはシグナルごとに一度だけ生成され、ここでは表示フラグだけを切り替える。

use std::collections::HashMap;

use leptos::prelude::*;
use p064_gallery_common::{Document, EmptyState, GalleryBindings};

/// カード1枚分（文書 + 表示フラグ）
#[derive(Clone)]
pub struct CardItem {
    pub document: Document,
    pub visible: RwSignal<bool>,
}

#[derive(Clone)]
pub struct SignalBindings {
    pub cards: HashMap<String, RwSignal<bool>>,
    pub result_text: RwSignal<String>,
    pub has_filters: RwSignal<bool>,
    pub empty_state: RwSignal<Option<EmptyState>>,
    pub gaam_options: RwSignal<Vec<String>>,
    pub taluko_active: RwSignal<bool>,
    pub gaam_active: RwSignal<bool>,
}

impl SignalBindings {
    /// 文書ごとに表示フラグを作り、カード一覧と一緒に返す
    pub fn new<'a>(documents: impl IntoIterator<Item = &'a Document>) -> (Self, Vec<CardItem>) {
        let items: Vec<CardItem> = documents
            .into_iter()
            .map(|document| CardItem {
                document: document.clone(),
                visible: RwSignal::new(true),
            })
            .collect();

        let cards = items
            .iter()
            .map(|item| (item.document.id.clone(), item.visible))
            .collect();

        let bindings = Self {
            cards,
            result_text: RwSignal::new(String::new()),
            has_filters: RwSignal::new(false),
            empty_state: RwSignal::new(None),
            gaam_options: RwSignal::new(Vec::new()),
            taluko_active: RwSignal::new(false),
            gaam_active: RwSignal::new(false),
        };
        (bindings, items)
    }
}

impl GalleryBindings for SignalBindings {
    fn set_card_visible(&mut self, doc_id: &str, visible: bool) {
        if let Some(flag) = self.cards.get(doc_id) {
            // 変化がなければ通知しない
            if flag.get_untracked() != visible {
                flag.set(visible);
            }
        }
    }

    fn set_result_count(&mut self, text: &str, has_filters: bool) {
        self.result_text.set(text.to_string());
        self.has_filters.set(has_filters);
    }

    fn set_empty_state(&mut self, empty: Option<&EmptyState>) {
        self.empty_state.set(empty.cloned());
    }

    fn set_gaam_options(&mut self, options: &[String]) {
        if self.gaam_options.with_untracked(|current| current.as_slice() != options) {
            self.gaam_options.set(options.to_vec());
        }
    }

    fn set_filter_highlight(&mut self, taluko_active: bool, gaam_active: bool) {
        self.taluko_active.set(taluko_active);
        self.gaam_active.set(gaam_active);
    }
}
