//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid location data format: {0}")]
    InvalidLocationData(String),

    #[error("Location filters are unavailable (location data not loaded)")]
    FiltersUnavailable,

    #[error("Invalid document set: {0}")]
    InvalidDocumentSet(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
