//! 対話式の絞り込み
//!
//! taluko → gaam → 検索語の順に選び、ブラウザのドロップダウンと同じ連動で結果を表示する。

use crate::error::{GalleryError, Result};
use crate::gallery::render_view;
use dialoguer::{Input, Select};
use p064_gallery_common::GalleryController;

/// 「指定なし」の選択肢
pub const ANY_OPTION: &str = "(すべて)";

/// 絞り込み後の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickAction {
    /// 条件を変えて再度絞り込み
    Refine,
    /// すべての条件を解除して再開
    ClearAll,
    /// 終了
    Quit,
}

impl PickAction {
    pub const ALL: [PickAction; 3] = [PickAction::Refine, PickAction::ClearAll, PickAction::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            PickAction::Refine => "条件を変更",
            PickAction::ClearAll => "すべての条件を解除",
            PickAction::Quit => "終了",
        }
    }
}

/// 先頭に「指定なし」を加えた選択肢
pub fn choice_items(options: &[String]) -> Vec<String> {
    std::iter::once(ANY_OPTION.to_string())
        .chain(options.iter().cloned())
        .collect()
}

/// 選択インデックスを値に戻す（0 は指定なし）
pub fn selected_value(options: &[String], index: usize) -> Option<&str> {
    index
        .checked_sub(1)
        .and_then(|i| options.get(i))
        .map(String::as_str)
}

/// 現在の選択位置（未選択なら 0）
fn current_index(options: &[String], current: Option<&str>) -> usize {
    current
        .and_then(|value| options.iter().position(|o| o == value))
        .map(|i| i + 1)
        .unwrap_or(0)
}

fn prompt_error(e: dialoguer::Error) -> GalleryError {
    GalleryError::Prompt(e.to_string())
}

/// 対話式で絞り込み
pub fn run_interactive_pick(controller: &mut GalleryController) -> Result<()> {
    if !controller.filters_enabled() {
        println!("位置データがないため検索語のみで絞り込みます");
    }

    loop {
        if controller.filters_enabled() {
            let talukos = controller.taluko_options();
            let current = controller.state().selected_taluko.clone();
            let index = Select::new()
                .with_prompt("Taluko")
                .items(&choice_items(&talukos))
                .default(current_index(&talukos, current.as_deref()))
                .interact()
                .map_err(prompt_error)?;
            controller.select_taluko(selected_value(&talukos, index))?;

            let gaams = controller.gaam_options().to_vec();
            let index = Select::new()
                .with_prompt("Gaam")
                .items(&choice_items(&gaams))
                .default(0)
                .interact()
                .map_err(prompt_error)?;
            controller.select_gaam(selected_value(&gaams, index))?;
        }

        let search: String = Input::new()
            .with_prompt("検索語（空欄で指定なし）")
            .with_initial_text(controller.state().search_term.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        let view = controller.set_search(&search);

        println!("\n{}\n", render_view(&view, controller.documents(), false));

        let labels: Vec<_> = PickAction::ALL.iter().map(PickAction::label).collect();
        let index = Select::new()
            .with_prompt("次の操作")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        match PickAction::ALL.get(index).copied().unwrap_or(PickAction::Quit) {
            PickAction::Refine => continue,
            PickAction::ClearAll => {
                let view = controller.clear_all();
                println!("  → 条件を解除しました（{}）\n", view.result_text);
            }
            PickAction::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Anand".to_string(), "Borsad".to_string()]
    }

    #[test]
    fn test_choice_items_prepends_any() {
        let items = choice_items(&options());
        assert_eq!(items, vec![ANY_OPTION, "Anand", "Borsad"]);
        assert_eq!(choice_items(&[]), vec![ANY_OPTION]);
    }

    #[test]
    fn test_selected_value() {
        let opts = options();
        assert_eq!(selected_value(&opts, 0), None);
        assert_eq!(selected_value(&opts, 1), Some("Anand"));
        assert_eq!(selected_value(&opts, 2), Some("Borsad"));
        assert_eq!(selected_value(&opts, 3), None);
    }

    #[test]
    fn test_current_index() {
        let opts = options();
        assert_eq!(current_index(&opts, None), 0);
        assert_eq!(current_index(&opts, Some("Borsad")), 2);
        assert_eq!(current_index(&opts, Some("Unknown")), 0);
    }
}
