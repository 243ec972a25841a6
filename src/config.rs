//! Configuration Module
//!
//! Handles loading and managing shell configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default prompt shown before each line
pub const DEFAULT_PROMPT: &str = "pokedex > ";

/// Shell configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the catalog API, without a trailing slash
    pub base_url: String,
    /// Cache staleness threshold and sweep period, in seconds
    pub cache_interval: u64,
    /// Prompt printed before reading each command
    pub prompt: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_INTERVAL` - Cache interval in seconds (default: 5)
    /// - `POKEDEX_PROMPT` - REPL prompt (default: "pokedex > ")
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(5),
            prompt: env::var("POKEDEX_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string()),
        }
    }

    /// Cache interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_interval: 5,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
