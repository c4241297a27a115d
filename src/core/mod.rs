pub mod common;
pub mod config;
pub mod kdtree;
pub mod vector;
pub use self::config::Config;
