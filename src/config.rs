//! Client configuration.
//!
//! Defaults are fixed constants; environment variables and YAML documents can
//! override them. The wallet path still reaches the facade as an explicit
//! constructor argument, this module only supplies its default.

use crate::{Error, ErrorContext, Result};
use keyring::Entry;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_WALLET_FILE: &str = "my_wallet.json";
pub const DEFAULT_AUTHORITY: &str = "fcoN_xJeisVsPXA-trzVAuIiqO3ydLQxM-L4XbrQKzY";
pub const DEFAULT_SCHEDULER: &str = "_GQ33BkPtZrqxA84vM8Zk-N2aO0toNNu_C-l-rawrBA";
pub const DEFAULT_SPAWN_DATA: &str = "optional initial data";
pub const DEFAULT_PROCESS_NAME: &str = "My Process";
pub const DEFAULT_RESULTS_LIMIT: u32 = 10;

pub const DEFAULT_BRIDGE_URL: &str = "http://localhost:4004";
pub const DEFAULT_BRIDGE_TIMEOUT_SECS: u64 = 60;

/// Facade defaults: wallet location plus the tags and metadata attached to spawns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AoConfig {
    pub wallet_file: PathBuf,
    /// Value of the `Authority` tag attached to every spawned process.
    pub authority: String,
    /// Scheduler unit coordinating spawned processes.
    pub scheduler: String,
    /// Placeholder initial data sent with every spawn.
    pub spawn_data: String,
    pub process_name: String,
    pub results_limit: u32,
}

impl Default for AoConfig {
    fn default() -> Self {
        Self {
            wallet_file: PathBuf::from(DEFAULT_WALLET_FILE),
            authority: DEFAULT_AUTHORITY.to_string(),
            scheduler: DEFAULT_SCHEDULER.to_string(),
            spawn_data: DEFAULT_SPAWN_DATA.to_string(),
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            results_limit: DEFAULT_RESULTS_LIMIT,
        }
    }
}

impl AoConfig {
    /// Defaults overridden by `AO_WALLET_FILE`, `AO_AUTHORITY` and `AO_SCHEDULER`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(v) = non_empty_var("AO_WALLET_FILE") {
            cfg.wallet_file = PathBuf::from(v);
        }
        if let Some(v) = non_empty_var("AO_AUTHORITY") {
            cfg.authority = v;
        }
        if let Some(v) = non_empty_var("AO_SCHEDULER") {
            cfg.scheduler = v;
        }
        cfg
    }

    /// Parse a YAML document; missing fields keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.authority.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "authority must not be empty",
                ErrorContext::new().with_field_path("authority"),
            ));
        }
        if self.scheduler.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "scheduler must not be empty",
                ErrorContext::new().with_field_path("scheduler"),
            ));
        }
        Ok(())
    }
}

/// Connection settings for [`crate::transport::HttpBridgeProvider`].
#[derive(Clone)]
pub struct BridgeConfig {
    pub base_url: url::Url,
    pub timeout: Duration,
    pub token: Option<String>,
}

impl BridgeConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_BRIDGE_TIMEOUT_SECS),
            token: None,
        })
    }

    /// Settings from `AO_BRIDGE_URL` and `AO_HTTP_TIMEOUT_SECS`.
    ///
    /// The bearer token comes from the OS keyring (`simple-ao` / `bridge`) first,
    /// then from `AO_BRIDGE_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let base = non_empty_var("AO_BRIDGE_URL").unwrap_or_else(|| DEFAULT_BRIDGE_URL.to_string());
        let timeout_secs = env::var("AO_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_BRIDGE_TIMEOUT_SECS);
        Ok(Self {
            base_url: parse_base_url(&base)?,
            timeout: Duration::from_secs(timeout_secs.max(1)),
            token: Self::lookup_token(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn lookup_token() -> Option<String> {
        // 1. Try Keyring
        if let Ok(entry) = Entry::new("simple-ao", "bridge") {
            if let Ok(token) = entry.get_password() {
                return Some(token);
            }
        }

        // 2. Try Environment Variable
        non_empty_var("AO_BRIDGE_TOKEN")
    }
}

impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<url::Url> {
    let url = url::Url::parse(raw.trim_end_matches('/')).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid bridge URL: {}", e),
            ErrorContext::new()
                .with_field_path("bridge.base_url")
                .with_details(raw.to_string()),
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            "bridge URL must use http or https",
            ErrorContext::new()
                .with_field_path("bridge.base_url")
                .with_details(raw.to_string()),
        ));
    }
    Ok(url)
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AoConfig::default();
        assert_eq!(cfg.wallet_file, PathBuf::from("my_wallet.json"));
        assert_eq!(cfg.authority, DEFAULT_AUTHORITY);
        assert_eq!(cfg.scheduler, DEFAULT_SCHEDULER);
        assert_eq!(cfg.spawn_data, "optional initial data");
        assert_eq!(cfg.results_limit, 10);
    }

    #[test]
    fn test_yaml_partial_override() {
        let cfg = AoConfig::from_yaml_str("scheduler: my-su\nresults_limit: 25\n").unwrap();
        assert_eq!(cfg.scheduler, "my-su");
        assert_eq!(cfg.results_limit, 25);
        assert_eq!(cfg.authority, DEFAULT_AUTHORITY);
    }

    #[test]
    fn test_yaml_rejects_blank_authority() {
        let err = AoConfig::from_yaml_str("authority: \"  \"\n").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_bridge_url_validation() {
        let cfg = BridgeConfig::new("http://127.0.0.1:4004/").unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:4004/");
        assert!(BridgeConfig::new("not a url").is_err());
        assert!(BridgeConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_bridge_debug_hides_token() {
        let cfg = BridgeConfig::new("http://localhost:4004")
            .unwrap()
            .with_token("s3cret");
        let text = format!("{:?}", cfg);
        assert!(!text.contains("s3cret"));
    }
}
