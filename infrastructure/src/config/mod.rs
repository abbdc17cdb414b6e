//! Configuration loading and raw TOML data types

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileApiConfig, FileCatalogConfig, FileConfig, FileLogConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
