//! エラーケーステスト
//!
//! 位置データ・設定・アセットフォルダの異常系を検証

use p064_gallery::assets;
use p064_gallery::config::Config;
use p064_gallery::error::GalleryError;
use p064_gallery::gallery::{self, FilterRequest};
use p064_gallery_common::{DocumentSet, GalleryConfig};
use std::path::Path;
use tempfile::tempdir;

/// 存在しない位置データは検索のみモードになる
#[test]
fn test_missing_location_data_degrades() {
    let dir = tempdir().expect("Failed to create temp dir");
    let controller = gallery::open(
        &GalleryConfig::default(),
        &dir.path().join("extracted_data.json"),
    )
    .unwrap();

    assert!(!controller.filters_enabled());
    assert_eq!(controller.view().count(), 601);
}

/// 壊れたJSONも検索のみモードになる
#[test]
fn test_malformed_location_data_degrades() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("extracted_data.json");
    std::fs::write(&path, "{ not json").unwrap();

    let controller = gallery::open(&GalleryConfig::default(), &path).unwrap();
    assert!(!controller.filters_enabled());
    assert!(controller.taluko_options().is_empty());
}

/// 配列形式の位置データは受け付けない
#[test]
fn test_array_location_data_degrades() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("extracted_data.json");
    std::fs::write(&path, "[]").unwrap();

    assert!(gallery::load_locations(&path).is_none());
}

/// 検索のみモードでの位置フィルタ指定
#[test]
fn test_location_filter_without_data() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut controller =
        gallery::open(&GalleryConfig::default(), &dir.path().join("missing.json")).unwrap();

    let request = FilterRequest {
        gaam: Some("Vasad".into()),
        ..Default::default()
    };
    let result = gallery::apply_filters(&mut controller, &request);
    assert!(matches!(result, Err(GalleryError::LocationDataRequired)));

    // 検索語だけなら使える
    let request = FilterRequest {
        search: Some("P0640601".into()),
        ..Default::default()
    };
    let view = gallery::apply_filters(&mut controller, &request).unwrap();
    assert_eq!(view.visible, vec!["P0640601"]);
}

/// 不正な設定ファイル
#[test]
fn test_invalid_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(Config::load_from(&path), Err(GalleryError::JsonParse(_))));

    std::fs::write(&path, r#"{"gallery": {"prefix": ""}}"#).unwrap();
    assert!(matches!(Config::load_from(&path), Err(GalleryError::Common(_))));
}

/// 存在しないアセットフォルダ
#[test]
fn test_check_nonexistent_folder() {
    let config = GalleryConfig::default();
    let documents = DocumentSet::generate(&config).unwrap();

    let result = assets::check_assets(
        &documents,
        &config,
        Some(Path::new("/nonexistent/path/12345")),
        None,
        false,
    );
    assert!(matches!(result, Err(GalleryError::FolderNotFound(_))));
}

/// GalleryErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GalleryError::Config("テスト設定エラー".to_string()),
        GalleryError::FolderNotFound("/tmp/images".to_string()),
        GalleryError::LocationDataRequired,
        GalleryError::Prompt("interrupted".to_string()),
    ];

    for err in errors {
        let msg = err.to_string();
        assert!(!msg.is_empty(), "Error message should not be empty");
    }

    let err = GalleryError::from(p064_gallery_common::Error::FiltersUnavailable);
    assert_eq!(
        err.to_string(),
        p064_gallery_common::Error::FiltersUnavailable.to_string()
    );
}

/// IOエラーの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GalleryError = io_err.into();
    assert!(matches!(err, GalleryError::Io(_)));
}
