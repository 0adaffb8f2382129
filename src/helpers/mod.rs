//! Helper Utilities

pub mod fs;
pub mod search;

pub use fs::{get_or_create_config_dir, get_or_create_data_dir};
pub use search::{derive_match, MatchIntent};
