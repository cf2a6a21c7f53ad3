use crate::error::{GalleryError, Result};
use p064_gallery_common::GalleryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ユーザー設定（~/.config/p064-gallery/config.json）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// 文書セットとアセット配置
    pub gallery: GalleryConfig,
    /// 画像フォルダ（check のデフォルト）
    pub image_folder: Option<PathBuf>,
    /// PDFフォルダ（check のデフォルト）
    pub pdf_folder: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.gallery.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("p064-gallery").join("config.json"))
    }

    /// 位置データのパス（--data が優先）
    pub fn data_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.gallery.data_path))
    }
}
