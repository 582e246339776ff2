//! Configuration management
//!
//! Defaults cover every setting, so the tool runs with no file present. An
//! optional `medley.toml` in the working directory (or an explicit
//! `--config` path) overrides them; command-line flags override both.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MedleyConfig {
    /// Concurrent counter settings
    pub counter: CounterConfig,

    /// Matrix demo settings
    pub matrix: MatrixConfig,

    /// Walkthrough demo settings
    pub demo: DemoConfig,
}

/// Settings for the concurrent counter workbench.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Worker threads to spawn (0 = derive from available cores)
    pub workers: usize,

    /// Increments each worker issues
    pub increments_per_worker: u64,

    /// Percentage of CPU cores used when deriving the worker count
    pub thread_percentage: u8,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            increments_per_worker: 1000,
            thread_percentage: 75,
        }
    }
}

/// Settings for the matrix demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub rows: usize,
    pub cols: usize,

    /// Fixed seed for reproducible matrices; unset means OS entropy
    pub seed: Option<u64>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            seed: None,
        }
    }
}

/// Settings shared by the walkthrough demos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Upper bound (exclusive) of the number range to classify
    pub numbers_limit: u64,

    /// Size of the generated person roster
    pub people_count: u32,

    /// Async demo task count
    pub task_count: usize,

    /// Steps each async demo task runs
    pub task_steps: u32,

    /// Delay between task steps, in milliseconds
    pub task_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers_limit: 100,
            people_count: 20,
            task_count: 3,
            task_steps: 3,
            task_delay_ms: 300,
        }
    }
}

impl MedleyConfig {
    /// Default configuration file name looked up in the working directory.
    pub const FILE_NAME: &'static str = "medley.toml";

    /// Load configuration from an explicit path, from `medley.toml` in the
    /// working directory when present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let local = Path::new(Self::FILE_NAME);
                if local.exists() {
                    Self::load_from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and parse a TOML configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file: {}", path.display()))
    }
}
