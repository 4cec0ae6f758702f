// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is an optional TOML file found at, in order:
//! - the path in `VW_CONFIG`
//! - `.vw.toml` in the current directory
//! - `vw/config.toml` under the platform config directory
//!
//! Keys:
//! - `output`: default output format (`text` or `json`)
//! - `limit`: default maximum number of listed records
//! - `utc_offset`: offset used for "now" and offset-less dates (e.g. `+03:00`)
//! - `[[sort]]`: default sort keys, used when no sort key is given elsewhere

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vw_core::SortKey;

use crate::cli::OutputFormat;
use crate::env;
use crate::error::{Error, Result};
use crate::rule::parse_offset;

const LOCAL_CONFIG_NAME: &str = ".vw.toml";
const APP_DIR_NAME: &str = "vw";
const CONFIG_FILE_NAME: &str = "config.toml";

/// User configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortKey>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        // Reject a bad offset at load time.
        config.offset()?;
        Ok(config)
    }

    /// Finds and loads the configuration file, or returns defaults if there
    /// is none.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        match resolve_config_path(env::config_path(), &cwd, dirs::config_dir()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Config::load(&path)
            }
            None => Ok(Config::default()),
        }
    }

    /// The configured UTC offset, if any.
    pub fn offset(&self) -> Result<Option<FixedOffset>> {
        self.utc_offset.as_deref().map(parse_offset).transpose()
    }
}

/// Picks the configuration file to load.
///
/// An explicit path is returned even when it does not exist, so that a
/// mistyped `VW_CONFIG` is reported instead of silently ignored.
pub fn resolve_config_path(
    explicit: Option<PathBuf>,
    cwd: &Path,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    let local = cwd.join(LOCAL_CONFIG_NAME);
    if local.is_file() {
        return Some(local);
    }

    config_dir
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
