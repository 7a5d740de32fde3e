//! Explorer binary configuration, optionally loaded from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::maze::MazeKind;

/// Explorer configuration (TOML).
///
/// Intended to be edited by humans. Missing fields default to sensible
/// values, and a missing file is equivalent to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Maze width when the CLI does not override it.
    pub width: i32,
    /// Maze height when the CLI does not override it.
    pub height: i32,
    /// Default layout selector.
    pub maze_kind: MazeKind,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Delay between rendered frames in milliseconds.
    pub frame_delay_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { frame_delay_ms: 33 }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            maze_kind: MazeKind::Random,
            render: RenderConfig::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height < 2 {
            return Err(anyhow!("maze dimensions must be at least 2x2"));
        }
        if self.render.frame_delay_ms > 10_000 {
            return Err(anyhow!("render.frame_delay_ms must be at most 10000"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ExplorerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ExplorerConfig> {
    if !path.exists() {
        let cfg = ExplorerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ExplorerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ExplorerConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
