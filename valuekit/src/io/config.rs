//! CLI configuration stored in `valuekit.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::customer::DEFAULT_MESSAGES;
use crate::model::task::{DEFAULT_PRIORITY, MAX_PRIORITY, MIN_PRIORITY};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "valuekit.toml";

/// `valuekit` configuration (TOML).
///
/// Missing fields fall back to the built-in task and customer defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct KitConfig {
    pub priority: PriorityConfig,
    pub customer: CustomerConfig,
}

/// Range applied to task priorities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PriorityConfig {
    pub min: i64,
    pub max: i64,
    /// Starting priority; clamped into `[min, max]`.
    pub default: i64,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            min: MIN_PRIORITY,
            max: MAX_PRIORITY,
            default: DEFAULT_PRIORITY,
        }
    }
}

/// Message history served to the demo customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerConfig {
    pub name: String,
    pub messages: Vec<String>,
}

impl Default for CustomerConfig {
    fn default() -> Self {
        Self {
            name: "Fred".to_string(),
            messages: DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl KitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.priority.min > self.priority.max {
            return Err(anyhow!(
                "priority.min ({}) must be <= priority.max ({})",
                self.priority.min,
                self.priority.max
            ));
        }
        if self.customer.name.trim().is_empty() {
            return Err(anyhow!("customer.name must be non-empty"));
        }
        if self.customer.messages.is_empty() {
            return Err(anyhow!("customer.messages must be a non-empty array"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `KitConfig::default()`.
pub fn load_config(path: &Path) -> Result<KitConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = KitConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: KitConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &KitConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
