//! Storage layer for guide-seo
//!
//! Reads deployment settings (API host, image host, timeout, template path)
//! from a TOML configuration file.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
