//! 外部リソースの取得

pub mod location;

pub use location::fetch_location_data;
