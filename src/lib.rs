pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod picker;
