//! 位置データ（taluko / gaam）モジュール
//!
//! extracted_data.json を文書ID → {taluko, gaam} のマップとして読み込み、
//! 絞り込み用の taluko 一覧と taluko → gaam の対応を構築する。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{Error, Result};

/// 1文書の位置情報
///
/// どちらのフィールドも欠けている可能性がある（部分データはそのまま保持）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taluko: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gaam: Option<String>,
}

impl LocationEntry {
    pub fn new(taluko: Option<&str>, gaam: Option<&str>) -> Self {
        Self {
            taluko: taluko.map(str::to_string),
            gaam: gaam.map(str::to_string),
        }
    }

    /// taluko と gaam の両方が揃っているか
    pub fn is_complete(&self) -> bool {
        self.taluko.is_some() && self.gaam.is_some()
    }

    /// 選択中の taluko / gaam に一致するか（未選択の条件は無視、欠けたフィールドは不一致）
    pub fn matches(&self, taluko: Option<&str>, gaam: Option<&str>) -> bool {
        if let Some(t) = taluko {
            if self.taluko.as_deref() != Some(t) {
                return false;
            }
        }
        if let Some(g) = gaam {
            if self.gaam.as_deref() != Some(g) {
                return false;
            }
        }
        true
    }
}

/// 位置データ全体
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    /// 文書ID → 位置情報
    entries: HashMap<String, LocationEntry>,
    /// taluko の一覧
    talukos: HashSet<String>,
    /// gaam の一覧
    gaams: HashSet<String>,
    /// taluko → gaam のマッピング
    taluko_to_gaams: HashMap<String, HashSet<String>>,
    /// taluko / gaam が揃っていない文書数（null エントリを含む）
    incomplete: usize,
}

impl LocationIndex {
    /// JSONファイルから読み込み
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    /// パース済みJSONから構築
    ///
    /// トップレベルがオブジェクトでなければエラー。
    /// エントリが null やオブジェクト以外の場合は「位置データなし」として扱う。
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            Error::InvalidLocationData(format!("expected an object, got {}", json_kind(value)))
        })?;

        let mut index = Self::default();
        for (doc_id, entry) in object {
            match entry.as_object() {
                Some(fields) => {
                    let entry = LocationEntry {
                        taluko: text_field(fields.get("taluko")),
                        gaam: text_field(fields.get("gaam")),
                    };
                    if !entry.is_complete() {
                        tracing::warn!("Document {} has incomplete location data: {:?}", doc_id, entry);
                    }
                    index.insert(doc_id.clone(), entry);
                }
                None => {
                    tracing::warn!("Document {} has incomplete location data: {}", doc_id, entry);
                    index.incomplete += 1;
                }
            }
        }

        tracing::info!(
            "Location data loaded: {} documents, {} unique talukos, {} unique gaams",
            index.entries.len(),
            index.talukos.len(),
            index.gaams.len()
        );
        if index.incomplete > 0 {
            tracing::warn!("{} documents have incomplete location data", index.incomplete);
        }

        Ok(index)
    }

    /// エントリを追加してインデックスを更新
    ///
    /// 同じ文書IDがあれば置き換え、一覧と不完全件数を置き換え後の内容に合わせる
    pub fn insert(&mut self, doc_id: String, entry: LocationEntry) {
        if !entry.is_complete() {
            self.incomplete += 1;
        }
        self.index_entry(&entry);

        if let Some(replaced) = self.entries.insert(doc_id, entry) {
            if !replaced.is_complete() {
                self.incomplete = self.incomplete.saturating_sub(1);
            }
            self.rebuild_lists();
        }
    }

    /// taluko / gaam 一覧を全エントリから作り直す
    fn rebuild_lists(&mut self) {
        self.talukos.clear();
        self.gaams.clear();
        self.taluko_to_gaams.clear();

        let entries = std::mem::take(&mut self.entries);
        for entry in entries.values() {
            self.index_entry(entry);
        }
        self.entries = entries;
    }

    fn index_entry(&mut self, entry: &LocationEntry) {
        if let Some(taluko) = &entry.taluko {
            self.talukos.insert(taluko.clone());
            if let Some(gaam) = &entry.gaam {
                self.taluko_to_gaams
                    .entry(taluko.clone())
                    .or_default()
                    .insert(gaam.clone());
            }
        }
        if let Some(gaam) = &entry.gaam {
            self.gaams.insert(gaam.clone());
        }
    }

    /// 文書IDの位置情報
    pub fn get(&self, doc_id: &str) -> Option<&LocationEntry> {
        self.entries.get(doc_id)
    }

    /// 位置データを持つ文書数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// taluko / gaam が揃っていない文書数
    pub fn incomplete_count(&self) -> usize {
        self.incomplete
    }

    /// taluko 一覧（昇順）
    pub fn talukos(&self) -> Vec<&str> {
        sorted(&self.talukos)
    }

    /// gaam 一覧（昇順）
    pub fn gaams(&self) -> Vec<&str> {
        sorted(&self.gaams)
    }

    /// taluko に属する gaam 一覧（昇順）。taluko が None なら全 gaam
    pub fn gaams_for(&self, taluko: Option<&str>) -> Vec<&str> {
        match taluko {
            Some(t) => self.taluko_to_gaams.get(t).map(sorted).unwrap_or_default(),
            None => self.gaams(),
        }
    }
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut v: Vec<_> = set.iter().map(|s| s.as_str()).collect();
    v.sort();
    v
}

/// 空文字列や文字列以外は欠損扱い
fn text_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
