//! 画像・PDFフォルダの検証
//!
//! 文書セットの各文書に対応する `P064xxxx.jpg` / `P064xxxx.pdf` が揃っているかを確認する。

use crate::error::{GalleryError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use p064_gallery_common::document::{IMAGE_EXTENSION, PDF_EXTENSION};
use p064_gallery_common::{DocumentSet, GalleryConfig};
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// フォルダのスキャン結果
#[derive(Debug, Default)]
pub struct FolderScan {
    /// 文書ID → ファイルパス
    pub found: HashMap<String, PathBuf>,
    /// 命名規則に合わない、または範囲外のファイル
    pub unexpected: Vec<PathBuf>,
}

/// 検証結果
#[derive(Debug, Default)]
pub struct AssetReport {
    pub checked: usize,
    pub missing_images: Vec<String>,
    pub missing_pdfs: Vec<String>,
    pub unexpected: Vec<PathBuf>,
    /// (文書ID, エラー)
    pub unreadable_images: Vec<(String, String)>,
}

impl AssetReport {
    pub fn is_ok(&self) -> bool {
        self.missing_images.is_empty()
            && self.missing_pdfs.is_empty()
            && self.unreadable_images.is_empty()
    }
}

/// `P064dddd.ext` に一致する正規表現
pub fn asset_pattern(config: &GalleryConfig, extension: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?i)^({})(\d{{{}}})\.{}$",
        regex::escape(&config.prefix),
        config.pad_width,
        regex::escape(extension)
    );
    Regex::new(&pattern).map_err(|e| GalleryError::Config(e.to_string()))
}

/// フォルダ直下をスキャンして文書IDごとのファイルを集める
pub fn scan_folder(
    folder: &Path,
    config: &GalleryConfig,
    extension: &str,
) -> Result<FolderScan> {
    if !folder.is_dir() {
        return Err(GalleryError::FolderNotFound(folder.display().to_string()));
    }

    let pattern = asset_pattern(config, extension)?;
    let mut scan = FolderScan::default();

    for entry in WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let sequence = pattern
            .captures(&file_name)
            .and_then(|caps| caps.get(2))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|seq| (1..=config.document_count).contains(seq));

        match sequence {
            Some(seq) => {
                let id = p064_gallery_common::document::document_id(
                    &config.prefix,
                    seq,
                    config.pad_width,
                );
                scan.found.insert(id, path.to_path_buf());
            }
            None => scan.unexpected.push(path.to_path_buf()),
        }
    }

    scan.unexpected.sort();
    Ok(scan)
}

/// 画像・PDFフォルダを文書セットと突き合わせる
pub fn check_assets(
    documents: &DocumentSet,
    config: &GalleryConfig,
    images: Option<&Path>,
    pdfs: Option<&Path>,
    verify_images: bool,
) -> Result<AssetReport> {
    let mut report = AssetReport {
        checked: documents.len(),
        ..Default::default()
    };

    if let Some(folder) = images {
        let scan = scan_folder(folder, config, IMAGE_EXTENSION)?;
        tracing::info!("画像 {} 件を検出: {}", scan.found.len(), folder.display());

        let progress = if verify_images {
            let pb = ProgressBar::new(documents.len() as u64);
            pb.set_style(
                ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            Some(pb)
        } else {
            None
        };

        for doc in documents {
            if let Some(pb) = &progress {
                pb.inc(1);
                pb.set_message(doc.filename.clone());
            }

            match scan.found.get(&doc.id) {
                None => report.missing_images.push(doc.id.clone()),
                Some(path) if verify_images => {
                    if let Err(e) = image::image_dimensions(path) {
                        report.unreadable_images.push((doc.id.clone(), e.to_string()));
                    }
                }
                Some(_) => {}
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }
        report.unexpected.extend(scan.unexpected);
    }

    if let Some(folder) = pdfs {
        let scan = scan_folder(folder, config, PDF_EXTENSION)?;
        tracing::info!("PDF {} 件を検出: {}", scan.found.len(), folder.display());

        report.missing_pdfs = documents
            .iter()
            .filter(|doc| !scan.found.contains_key(&doc.id))
            .map(|doc| doc.id.clone())
            .collect();
        report.unexpected.extend(scan.unexpected);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn small_config() -> GalleryConfig {
        GalleryConfig {
            document_count: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_asset_pattern() {
        let pattern = asset_pattern(&GalleryConfig::default(), "jpg").unwrap();
        assert!(pattern.is_match("P0640001.jpg"));
        assert!(pattern.is_match("P0640601.JPG"));
        assert!(!pattern.is_match("P064001.jpg"));
        assert!(!pattern.is_match("P0640001.pdf"));
        assert!(!pattern.is_match("xP0640001.jpg"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), &small_config(), "jpg");
        assert!(matches!(result, Err(GalleryError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_classifies_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("P0640001.jpg")).unwrap();
        File::create(dir.path().join("P0640003.jpg")).unwrap();
        File::create(dir.path().join("P0640009.jpg")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let scan = scan_folder(dir.path(), &small_config(), "jpg").unwrap();
        assert_eq!(scan.found.len(), 2);
        assert!(scan.found.contains_key("P0640001"));
        assert!(scan.found.contains_key("P0640003"));
        assert_eq!(scan.unexpected.len(), 2);
    }

    #[test]
    fn test_check_assets_reports_missing() {
        let config = small_config();
        let documents = DocumentSet::generate(&config).unwrap();

        let images = tempdir().unwrap();
        let pdfs = tempdir().unwrap();
        for name in ["P0640001.jpg", "P0640002.jpg", "P0640003.jpg"] {
            File::create(images.path().join(name)).unwrap();
        }
        File::create(pdfs.path().join("P0640002.pdf")).unwrap();

        let report =
            check_assets(&documents, &config, Some(images.path()), Some(pdfs.path()), false)
                .unwrap();
        assert_eq!(report.checked, 3);
        assert!(report.missing_images.is_empty());
        assert_eq!(report.missing_pdfs, vec!["P0640001", "P0640003"]);
        assert!(!report.is_ok());
    }

    #[test]
    fn test_verify_images_flags_broken_files() {
        let config = GalleryConfig {
            document_count: 1,
            ..Default::default()
        };
        let documents = DocumentSet::generate(&config).unwrap();
        let images = tempdir().unwrap();
        std::fs::write(images.path().join("P0640001.jpg"), b"not an image").unwrap();

        let report = check_assets(&documents, &config, Some(images.path()), None, true).unwrap();
        assert_eq!(report.unreadable_images.len(), 1);
        assert_eq!(report.unreadable_images[0].0, "P0640001");
    }
}
