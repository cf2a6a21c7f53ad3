//! ギャラリー設定
//!
//! 文書セットの範囲とアセットの配置先。CLIはユーザー設定ファイルで上書きでき、
//! Webはデフォルト値をそのまま使う。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_PREFIX: &str = "P064";
pub const DEFAULT_DOCUMENT_COUNT: u32 = 601;
pub const DEFAULT_PAD_WIDTH: usize = 4;
pub const DEFAULT_IMAGE_DIR: &str = "/public/address-images/p064";
pub const DEFAULT_PDF_DIR: &str = "P064";
pub const DEFAULT_DATA_PATH: &str = "extracted_data.json";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    /// ファイル名の接頭辞（P064）
    pub prefix: String,
    /// 文書数（1..=count）
    pub document_count: u32,
    /// 連番のゼロ埋め桁数
    pub pad_width: usize,
    /// 画像ディレクトリ
    pub image_dir: String,
    /// PDFディレクトリ
    pub pdf_dir: String,
    /// 位置データJSON
    pub data_path: String,
    /// 検索入力のデバウンス（ミリ秒）
    pub search_debounce_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            document_count: DEFAULT_DOCUMENT_COUNT,
            pad_width: DEFAULT_PAD_WIDTH,
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            pdf_dir: DEFAULT_PDF_DIR.to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl GalleryConfig {
    /// 文書セットを生成できる設定か検証
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(Error::Config("prefix must not be empty".into()));
        }
        if self.document_count == 0 {
            return Err(Error::Config("document_count must be at least 1".into()));
        }
        let digits = self.document_count.to_string().len();
        if digits > self.pad_width {
            return Err(Error::Config(format!(
                "document_count {} does not fit in {} digits",
                self.document_count, self.pad_width
            )));
        }
        Ok(())
    }
}
