//! # Configuration
//!
//! Override hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.retort/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Configuration only seeds the form; nothing typed during a session is
//! ever written back.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::notify::DEFAULT_NOTIFICATION_TTL;
use crate::core::tone::Tone;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RetortConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Tone id, e.g. "formal". Unknown ids fall back to the default.
    pub default_tone: Option<String>,
    pub notification_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WebhookConfig {
    pub url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub tone: Tone,
    pub webhook_url: Option<String>,
    pub notification_ttl: Duration,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub tone: Option<Tone>,
    pub webhook_url: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.retort/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".retort").join("config.toml"))
}

/// Load config from `~/.retort/config.toml`.
pub fn load_config() -> Result<RetortConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(RetortConfig::default())
        }
    }
}

/// Load config from an explicit path, generating a commented default if the
/// file does not exist. Malformed files are an error.
pub fn load_config_from(path: &Path) -> Result<RetortConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(RetortConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RetortConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Retort Configuration
# All settings are optional. Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_tone = "formal"     # formal, informal, humor, exagerado, sarcastico, diplomatico
# notification_secs = 5       # how long notifications stay on screen

# [webhook]
# url = "https://your-n8n-instance.com/webhook/your-webhook-id"   # or RETORT_WEBHOOK_URL
"#;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RetortConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &RetortConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Tone: CLI → env → config → default
    let tone = cli.tone.unwrap_or_else(|| {
        env("RETORT_TONE")
            .or_else(|| config.general.default_tone.clone())
            .map(|id| parse_tone(&id))
            .unwrap_or_default()
    });

    // Webhook URL: CLI → env → config; blank values count as unset
    let webhook_url = cli
        .webhook_url
        .clone()
        .or_else(|| env("RETORT_WEBHOOK_URL"))
        .or_else(|| config.webhook.url.clone())
        .filter(|url| !url.trim().is_empty());

    let notification_ttl = config
        .general
        .notification_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_NOTIFICATION_TTL);

    ResolvedConfig {
        tone,
        webhook_url,
        notification_ttl,
    }
}

fn parse_tone(id: &str) -> Tone {
    Tone::from_id(id.trim()).unwrap_or_else(|| {
        warn!("Unknown tone '{}', using {}", id, Tone::default().id());
        Tone::default()
    })
}
