use crate::search::eval::Heuristic;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Minimax,
    #[value(name = "alphabeta")]
    AlphaBeta,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("search_depth must be at least 1")]
    ZeroDepth,
    #[error("timeout threshold must be a positive number of milliseconds, got {0}")]
    BadThreshold(f64),
}

/// Options for one search agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched in fixed-depth mode; the last depth tried when iterating.
    pub search_depth: u32,
    pub method: Method,
    pub iterative: bool,
    /// Remaining time (ms) below which the search aborts.
    pub timeout: f64,
    pub heuristic: Heuristic,
    /// Seed for the provisional move pick.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            method: Method::Minimax,
            iterative: true,
            timeout: 10.0,
            heuristic: Heuristic::Custom,
            seed: 0,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 { return Err(ConfigError::ZeroDepth); }
        if !self.timeout.is_finite() || self.timeout <= 0.0 {
            return Err(ConfigError::BadThreshold(self.timeout));
        }
        Ok(())
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: SearchConfig = serde_json::from_str(s).context("parse search config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("read search config: {}", path.as_ref().display()))?;
        Self::from_json(&text)
    }
}
