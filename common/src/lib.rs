//! P064 Gallery Common Library
//!
//! CLIとWeb(WASM)で共有される文書セット・位置データ・絞り込み・表示状態

pub mod config;
pub mod controller;
pub mod display;
pub mod document;
pub mod error;
pub mod filter;
pub mod location;

pub use config::GalleryConfig;
pub use controller::GalleryController;
pub use display::{
    active_filter_info, active_filters, result_count_text, sync_display, ActiveFilter,
    EmptyState, GalleryBindings, GalleryView, LocationStatistics, Statistics,
};
pub use document::{Document, DocumentSet};
pub use error::{Error, Result};
pub use filter::{resolve, FilterOutcome, FilterState};
pub use location::{LocationEntry, LocationIndex};
