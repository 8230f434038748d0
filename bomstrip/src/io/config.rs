//! Scan configuration, optionally read from `.bomstrip.toml` in the scan root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::types::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};

/// File name looked up in the scan root when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = ".bomstrip.toml";

/// Scan configuration (TOML).
///
/// Missing fields fall back to the built-in allowlist and exclusion set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// File name suffixes to scan, including the leading dot.
    pub extensions: Vec<String>,

    /// Directory names that are never descended into.
    pub excluded_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(anyhow!("extensions must be a non-empty array"));
        }
        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(anyhow!(
                    "extension '{ext}' must start with '.' followed by a name"
                ));
            }
        }
        for name in &self.excluded_dirs {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(anyhow!(
                    "excluded dir '{name}' must be a plain directory name"
                ));
            }
        }
        Ok(())
    }

    /// Replace the allowlist if `extensions` is non-empty.
    ///
    /// Accepts names with or without the leading dot (`md` or `.md`).
    pub fn with_extensions(mut self, extensions: &[String]) -> Self {
        if !extensions.is_empty() {
            self.extensions = extensions
                .iter()
                .map(|ext| {
                    if ext.starts_with('.') {
                        ext.clone()
                    } else {
                        format!(".{ext}")
                    }
                })
                .collect();
        }
        self
    }

    /// Add directory names to the exclusion set, skipping duplicates.
    pub fn with_excluded_dirs(mut self, names: &[String]) -> Self {
        for name in names {
            if !self.excluded_dirs.contains(name) {
                self.excluded_dirs.push(name.clone());
            }
        }
        self
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ScanConfig::default()`.
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    if !path.exists() {
        let cfg = ScanConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ScanConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Resolve the config for a scan: an explicit path must exist, otherwise
/// `.bomstrip.toml` in `root` is used when present.
pub fn resolve_config(root: &Path, explicit: Option<&Path>) -> Result<ScanConfig> {
    match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(anyhow!("config file {} not found", path.display()));
            }
            load_config(path)
        }
        None => load_config(&root.join(CONFIG_FILE_NAME)),
    }
}
