use std::collections::HashMap;
use tracing::Level;

/// Bundled config for builds that cannot read a `.env` file (wasm)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("RUFFO_API_BASE must be an absolute http(s) URL, got {0:?}")]
    InvalidApiBase(String),

    #[error("RUFFO_LOG is not a log level: {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Origin of the chat API, without trailing slash.
    pub api_base: String,
    pub log_level: Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl WidgetConfig {
    /// Environment first, then `.env` (native only), then the bundled defaults.
    pub fn load() -> Result<Self, ConfigError> {
        load_dotenv();
        let bundled = parse_env_lines(BUNDLED_CONFIG);
        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| bundled.get(key).cloned())
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base = match lookup("RUFFO_API_BASE") {
            Some(raw) => normalize_api_base(&raw)?,
            None => DEFAULT_API_BASE.to_string(),
        };

        let log_level = match lookup("RUFFO_LOG") {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw))?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            api_base,
            log_level,
        })
    }
}

fn normalize_api_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidApiBase(raw.to_string())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // A missing .env is fine: the bundled defaults cover it.
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(source: &str) -> HashMap<String, String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
