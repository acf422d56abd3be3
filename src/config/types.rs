use crate::error::{RainbowError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}

/// Location of the Sparkle API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Request timeout in seconds; requests wait indefinitely when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 9860,
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Base URL the resource endpoints hang off
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Point the client at `url`, keeping the timeout setting
    pub fn set_url(&mut self, url: &str) -> Result<()> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| RainbowError::Config(format!("invalid API URL {}: {}", url, e)))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| RainbowError::Config(format!("API URL {} has no host", url)))?;
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| RainbowError::Config(format!("API URL {} has no port", url)))?;

        self.scheme = parsed.scheme().to_string();
        self.host = host.to_string();
        self.port = port;
        Ok(())
    }
}

/// Route table settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Path unmatched navigations are redirected to
    pub fallback: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            fallback: "/instances".to_string(),
        }
    }
}
