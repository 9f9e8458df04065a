//! Claude configuration

use jfit_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Claude Messages API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl ClaudeConfig {
    /// Create configuration from environment variables.
    ///
    /// Returns `Ok(None)` when `ANTHROPIC_API_KEY` is missing or blank, and
    /// `Err` when the key is present but the rest of the configuration is unusable.
    pub fn from_env() -> Result<Option<Self>> {
        dotenvy::dotenv().ok();

        let api_key = match env::var("ANTHROPIC_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => return Ok(None),
        };

        let api_url = env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let model = env::var("ANTHROPIC_MODEL")
            .ok()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| crate::ClaudeClient::CLAUDE_3_HAIKU.to_string());

        let timeout_secs = env::var("ANTHROPIC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Some(Self {
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
            timeout_secs,
        }))
    }

    /// Create configuration with explicit values
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            model: crate::ClaudeClient::CLAUDE_3_HAIKU.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Point the client at another base URL (a proxy or a local mock server)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn validate_api_url(raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| Error::Configuration(format!("invalid ANTHROPIC_API_URL {:?}: {}", raw, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::Configuration(format!(
            "ANTHROPIC_API_URL must use http or https, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "ANTHROPIC_API_KEY",
        "ANTHROPIC_API_URL",
        "ANTHROPIC_MODEL",
        "ANTHROPIC_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: env-mutating tests hold ENV_LOCK.
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    fn test_missing_key_is_unconfigured() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();
        // SAFETY: guarded by ENV_LOCK.
        unsafe { env::set_var("ANTHROPIC_API_KEY", "   ") };

        let config = ClaudeConfig::from_env().expect("blank key is not an error");
        assert!(config.is_none());

        clear_env();
    }

    #[test]
    fn test_defaults_with_key() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();
        // SAFETY: guarded by ENV_LOCK.
        unsafe {
            env::set_var("ANTHROPIC_API_KEY", "sk-test");
            env::set_var("ANTHROPIC_TIMEOUT_SECS", "not-a-number");
        }

        let config = ClaudeConfig::from_env()
            .expect("config should load")
            .expect("key is set");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "claude-3-haiku-20240307");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        clear_env();
    }

    #[test]
    fn test_invalid_url_is_configuration_error() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();
        // SAFETY: guarded by ENV_LOCK.
        unsafe {
            env::set_var("ANTHROPIC_API_KEY", "sk-test");
            env::set_var("ANTHROPIC_API_URL", "ftp://example.com");
        }

        let result = ClaudeConfig::from_env();
        assert!(matches!(result, Err(Error::Configuration(_))));

        // SAFETY: guarded by ENV_LOCK.
        unsafe { env::set_var("ANTHROPIC_API_URL", "not a url") };
        assert!(matches!(ClaudeConfig::from_env(), Err(Error::Configuration(_))));

        clear_env();
    }

    #[test]
    fn test_with_api_url_strips_trailing_slash() {
        let config = ClaudeConfig::new("k".to_string()).with_api_url("http://127.0.0.1:9000/");
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }
}
