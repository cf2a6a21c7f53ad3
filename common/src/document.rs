//! 文書セット
//!
//! P0640001.jpg 〜 P0640601.jpg の固定セットを連番から生成する。
//! 初期化後に文書が増減することはない。

use serde::{Deserialize, Serialize};

use crate::config::GalleryConfig;
use crate::error::{Error, Result};

/// 画像ファイルの拡張子
pub const IMAGE_EXTENSION: &str = "jpg";
/// PDFファイルの拡張子
pub const PDF_EXTENSION: &str = "pdf";

/// ギャラリーの1文書
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// 連番（1始まり）
    pub sequence: u32,
    /// 文書ID（拡張子なし、位置データの結合キー）
    pub id: String,
    /// 画像ファイル名
    pub filename: String,
    /// 表示ラベル（P064.zip/P064/P0640001）
    pub label: String,
    /// 画像パス
    pub image_path: String,
    /// PDFパス
    pub pdf_path: String,
}

impl Document {
    /// 検索対象のテキスト（ファイル名と表示ラベル）に部分一致するか
    ///
    /// `term` は小文字化済みであること
    pub fn matches_search(&self, term: &str) -> bool {
        self.filename.to_lowercase().contains(term) || self.label.to_lowercase().contains(term)
    }
}

/// 順序付きの文書セット
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<Document>,
}

impl DocumentSet {
    /// 設定から文書セットを生成
    pub fn generate(config: &GalleryConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::InvalidDocumentSet(e.to_string()))?;

        let documents = (1..=config.document_count)
            .map(|seq| build_document(config, seq))
            .collect::<Vec<_>>();

        tracing::info!("Loaded {} images", documents.len());
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// 文書IDで検索
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// 全文書IDを元の順序で返す
    pub fn ids(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.id.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// 連番から文書IDを生成（P064 + ゼロ埋め4桁）
pub fn document_id(prefix: &str, sequence: u32, pad_width: usize) -> String {
    format!("{}{:0width$}", prefix, sequence, width = pad_width)
}

/// 表示ラベル（アーカイブ内パス形式）
pub fn display_label(prefix: &str, id: &str) -> String {
    format!("{prefix}.zip/{prefix}/{id}")
}

fn join_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

fn build_document(config: &GalleryConfig, sequence: u32) -> Document {
    let id = document_id(&config.prefix, sequence, config.pad_width);
    let filename = format!("{}.{}", id, IMAGE_EXTENSION);
    let pdf_name = format!("{}.{}", id, PDF_EXTENSION);

    Document {
        sequence,
        label: display_label(&config.prefix, &id),
        image_path: join_path(&config.image_dir, &filename),
        pdf_path: join_path(&config.pdf_dir, &pdf_name),
        filename,
        id,
    }
}
