//! # Storage Layer
//!
//! Persistence for pages as plain files.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Pages | Raw body bytes, no header | `{dir}/{title}.txt` |
//! | Local config | TOML | `./pagefile.toml` |
//! | Global config | TOML | `~/.config/pagefile/config.toml` |
//!
//! ## Concurrency
//!
//! None. Saves are plain truncate-and-write calls with no locking, so two
//! concurrent saves of one title leave whichever finished last.
//!
//! ## Key Items
//!
//! - [`save`] / [`load`] - Page files in the working directory
//! - [`save_in`] / [`load_from`] - Page files under an explicit directory
//! - [`StoreError`] - Write, read and list failures
//! - [`Config`] - Local and global configuration

mod config;
mod store;

pub use config::{Config, ConfigError, GlobalConfig, LocalConfig, OutputFormat, LOCAL_CONFIG_FILE};
pub use store::{exists_in, list_in, load, load_from, path_in, save, save_in, StoreError};
