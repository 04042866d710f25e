use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::graph::{ChartStyle, TraversalLimits};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gedchart: GedchartConfig,
    #[serde(default)]
    pub traversal: TraversalConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// General settings
#[derive(Debug, Clone, Deserialize)]
pub struct GedchartConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GedchartConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Recursion guard for chart and kinship queries
#[derive(Debug, Clone, Deserialize)]
pub struct TraversalConfig {
    /// Set to false to walk without any depth limit
    #[serde(default = "default_cycle_guard")]
    pub cycle_guard: bool,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            cycle_guard: default_cycle_guard(),
            max_depth: default_max_depth(),
        }
    }
}

/// Chart layout
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

fn default_log_level() -> String {
    // Charts go to stdout; keep stderr quiet unless asked
    "warn".to_string()
}

fn default_cycle_guard() -> bool {
    true
}

fn default_max_depth() -> usize {
    256
}

fn default_indent() -> String {
    ChartStyle::default().indent
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in GEDCHART_CONFIG environment variable (must exist)
    /// 2. ./gedchart.toml in current directory (defaults are used if absent)
    pub fn load() -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        match std::env::var("GEDCHART_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let default_path = PathBuf::from("gedchart.toml");
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and validate a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        self.gedchart
            .log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("gedchart.log_level is not a log level: {}", self.gedchart.log_level))?;

        if self.traversal.max_depth == 0 {
            anyhow::bail!("traversal.max_depth must be greater than 0");
        }

        if self.output.indent.chars().count() < 2 {
            anyhow::bail!("output.indent must be at least two characters");
        }

        Ok(())
    }

    /// Depth guard derived from the traversal section
    pub fn traversal_limits(&self) -> TraversalLimits {
        if self.traversal.cycle_guard {
            TraversalLimits::max_depth(self.traversal.max_depth)
        } else {
            TraversalLimits::unbounded()
        }
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            indent: self.output.indent.clone(),
        }
    }
}
