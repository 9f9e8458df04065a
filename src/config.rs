//! Application configuration for the `jfit` front end

use serde_json::json;
use std::env;

pub const DEFAULT_MAX_WORD_COUNT: &str = "5000";
pub const DEFAULT_REQUIRED_SECTIONS: &str =
    "Abstract, Introduction, Methods, Results, Discussion, References, Conflict of Interest";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Form defaults and runtime settings, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raw word limit; left unparsed so the rule engine can report bad values
    pub max_word_count: String,
    pub required_sections: String,
    pub max_reply_tokens: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_word_count: DEFAULT_MAX_WORD_COUNT.to_string(),
            required_sections: DEFAULT_REQUIRED_SECTIONS.to_string(),
            max_reply_tokens: jfit_assess::DEFAULT_MAX_REPLY_TOKENS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every value has a default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let default = Self::default();
        Self {
            max_word_count: env::var("JFIT_MAX_WORD_COUNT").unwrap_or(default.max_word_count),
            required_sections: env::var("JFIT_REQUIRED_SECTIONS")
                .unwrap_or(default.required_sections),
            max_reply_tokens: env::var("JFIT_MAX_REPLY_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|tokens| *tokens > 0)
                .unwrap_or(default.max_reply_tokens),
            log_level: env::var("LOG_LEVEL").unwrap_or(default.log_level),
        }
    }

    /// Summary for debug logging; carries no secrets
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "max_word_count": self.max_word_count,
            "required_sections": self.required_sections,
            "max_reply_tokens": self.max_reply_tokens,
            "log_level": self.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "JFIT_MAX_WORD_COUNT",
        "JFIT_REQUIRED_SECTIONS",
        "JFIT_MAX_REPLY_TOKENS",
        "LOG_LEVEL",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: env-mutating tests hold ENV_LOCK.
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    fn config_defaults_match_form_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        let cfg = AppConfig::from_env();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.max_word_count, "5000");
        assert!(cfg.required_sections.starts_with("Abstract, Introduction"));
        assert_eq!(cfg.max_reply_tokens, 150);
    }

    #[test]
    fn config_reads_overrides() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();
        // SAFETY: guarded by ENV_LOCK.
        unsafe {
            env::set_var("JFIT_MAX_WORD_COUNT", "8000");
            env::set_var("JFIT_REQUIRED_SECTIONS", "Abstract, Funding");
            env::set_var("JFIT_MAX_REPLY_TOKENS", "0");
            env::set_var("LOG_LEVEL", "debug");
        }

        let cfg = AppConfig::from_env();
        assert_eq!(cfg.max_word_count, "8000");
        assert_eq!(cfg.required_sections, "Abstract, Funding");
        assert_eq!(cfg.max_reply_tokens, 150);
        assert_eq!(cfg.log_level, "debug");

        clear_env();
    }

    #[test]
    fn summary_lists_settings() {
        let summary = AppConfig::default().summary();
        assert_eq!(summary["max_word_count"], "5000");
        assert_eq!(summary["max_reply_tokens"], 150);
    }
}
