pub mod filter_bar;
pub mod gallery_grid;
pub mod header;
pub mod loading;
pub mod no_results;
