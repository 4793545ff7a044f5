//! Session configuration.

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use zticks_resample::DEFAULT_SLACK_DAYS;

use crate::ConfigError;

/// Default price multiplier for five-digit quotes.
pub const DEFAULT_TICK_SCALE: f64 = 1e-5;

/// Default number of records a host fetches per history call.
pub const DEFAULT_MAX_TICKS: usize = 500;

/// Settings shared by every session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding `<broker>/BacktestingCache/V1/<account>` trees.
    /// `None` uses the platform default.
    pub cache_root: Option<PathBuf>,
    /// Days searched below a window start before giving up.
    pub slack_days: u32,
    /// Price multiplier for symbols without an entry in `tick_scales`.
    pub default_tick_scale: f64,
    /// Per-symbol price multipliers, matched case-insensitively.
    pub tick_scales: HashMap<String, f64>,
    /// Records a host fetches per history call.
    pub max_ticks: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cache_root: None,
            slack_days: DEFAULT_SLACK_DAYS,
            default_tick_scale: DEFAULT_TICK_SCALE,
            tick_scales: HashMap::new(),
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }
}

impl SessionConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// holds an invalid tick scale.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every tick scale is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns the first invalid scale found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scales = std::iter::once(("default", self.default_tick_scale))
            .chain(self.tick_scales.iter().map(|(s, v)| (s.as_str(), *v)));

        for (symbol, value) in scales {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTickScale {
                    symbol: symbol.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Sets the cache root.
    #[must_use]
    pub fn with_cache_root(mut self, cache_root: impl Into<PathBuf>) -> Self {
        self.cache_root = Some(cache_root.into());
        self
    }

    /// Sets the slack window.
    #[must_use]
    pub fn with_slack_days(mut self, slack_days: u32) -> Self {
        self.slack_days = slack_days;
        self
    }

    /// Sets the default tick scale.
    #[must_use]
    pub fn with_default_tick_scale(mut self, scale: f64) -> Self {
        self.default_tick_scale = scale;
        self
    }

    /// Sets the tick scale of one symbol.
    #[must_use]
    pub fn with_tick_scale(mut self, symbol: impl Into<String>, scale: f64) -> Self {
        self.tick_scales.insert(symbol.into(), scale);
        self
    }

    /// Sets the per-call record limit reported to hosts.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Returns the price multiplier for `symbol`.
    #[must_use]
    pub fn tick_scale(&self, symbol: &str) -> f64 {
        self.tick_scales
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(symbol))
            .map_or(self.default_tick_scale, |(_, scale)| *scale)
    }

    /// Returns the configured cache root, or the platform default.
    #[must_use]
    pub fn resolved_cache_root(&self) -> Option<PathBuf> {
        self.cache_root.clone().or_else(default_cache_root)
    }
}

/// Returns the default cTrader cache root.
///
/// This is `Spotware/Cache` under the platform data directory:
/// - Windows: `C:\Users\<User>\AppData\Roaming\Spotware\Cache`
/// - Linux: `~/.local/share/Spotware/Cache`
/// - macOS: `~/Library/Application Support/Spotware/Cache`
#[must_use]
pub fn default_cache_root() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.data_dir().join("Spotware").join("Cache"))
}
