//! Configuration file parser for feed finder settings.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Settings for fetching and decoding pages.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `User-Agent` header sent when fetching pages.
    pub user_agent: String,

    /// Overall limit for one page fetch, in seconds. `None` = no limit.
    pub timeout_secs: Option<u64>,

    /// Largest page body accepted, in bytes.
    pub max_page_bytes: usize,

    /// Permit fetching from localhost and private network addresses.
    /// Set to `false` when page URLs come from untrusted input.
    pub allow_private_hosts: bool,

    /// Replace invalid UTF-8 instead of rejecting the page.
    pub lossy_utf8: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: concat!("feedfinder/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
            max_page_bytes: Self::DEFAULT_MAX_PAGE_BYTES,
            allow_private_hosts: true,
            lossy_utf8: true,
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    pub const DEFAULT_MAX_PAGE_BYTES: usize = 5 * 1024 * 1024;

    const KNOWN_KEYS: [&'static str; 5] = [
        "user_agent",
        "timeout_secs",
        "max_page_bytes",
        "allow_private_hosts",
        "lossy_utf8",
    ];

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
