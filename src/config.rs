//! Deck configuration.
//!
//! Loaded from (highest precedence first):
//! 1. Environment variables prefixed with `LAUNCHDECK_`
//! 2. TOML file given with `--config`, or `~/.config/launchdeck/config.toml`
//! 3. Defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::renderers::charset::CharSet;

const CONFIG_DIR_NAME: &str = "launchdeck";
const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "LAUNCHDECK_";

/// Configuration for navigation timing and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Transition lock window after each slide change, in milliseconds.
    pub cooldown_ms: u64,
    /// Event-poll and animation tick, in milliseconds.
    pub tick_ms: u64,
    /// Rows scrolled per wheel tick inside the org chart.
    pub scroll_step: u16,
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Number of background stars.
    pub star_count: usize,
    /// Number of shooting stars.
    pub shooting_stars: usize,
    /// Seed for the decorative layers. None = fresh entropy per run.
    pub seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 800,
            tick_ms: 33,
            scroll_step: 1,
            unicode: true,
            star_count: 200,
            shooting_stars: 5,
            seed: None,
        }
    }
}

impl DeckConfig {
    /// Load configuration, reading `config_path` or the default location.
    ///
    /// A missing file is not an error; the figment TOML provider treats it as
    /// empty.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let config_file = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let config: DeckConfig = Figment::new()
            .merge(Serialized::defaults(DeckConfig::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        config.validate()?;
        tracing::debug!(path = %config_file.display(), ?config, "configuration loaded");
        Ok(config)
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cooldown_ms == 0 {
            return Err(Error::config("cooldown_ms must be greater than 0"));
        }
        if self.tick_ms == 0 {
            return Err(Error::config("tick_ms must be greater than 0"));
        }
        if self.scroll_step == 0 {
            return Err(Error::config("scroll_step must be greater than 0"));
        }
        Ok(())
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn charset(&self) -> CharSet {
        if self.unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
