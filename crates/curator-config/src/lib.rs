use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ApiSection {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
    /// How close to the end of the loaded rows the selection may get before
    /// the next page is requested.
    #[serde(default)]
    pub prefetch_rows: Option<usize>,
}

const DEFAULT_CONFIG: &str = include_str!("defaults.toml");

impl Config {
    pub fn load() -> Self {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).expect("embedded defaults must parse");

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(user) => config.merge(user),
                    Err(e) => eprintln!("Warning: ignoring config at {}: {e}", path.display()),
                }
            }
        }

        config
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("curator").join("config.toml"))
    }

    pub fn merge(&mut self, user: Config) {
        if user.api.base_url.is_some() {
            self.api.base_url = user.api.base_url;
        }
        if user.api.timeout_ms.is_some() {
            self.api.timeout_ms = user.api.timeout_ms;
        }
        if user.ui.tick_rate_ms.is_some() {
            self.ui.tick_rate_ms = user.ui.tick_rate_ms;
        }
        if user.ui.prefetch_rows.is_some() {
            self.ui.prefetch_rows = user.ui.prefetch_rows;
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or("https://admin.delgo.pet/api")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms.unwrap_or(10_000))
    }

    pub fn tick_rate_ms(&self) -> u64 {
        self.ui.tick_rate_ms.unwrap_or(250)
    }

    pub fn prefetch_rows(&self) -> usize {
        self.ui.prefetch_rows.unwrap_or(2)
    }
}

#[cfg(test)]
mod tests;
