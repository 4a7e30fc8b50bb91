//! Application Config
//!
//! Values baked in at build time (`TODO_API_URL`, `TODO_USER_ID`, `TODO_LOG`)
//! and handed to the root component from `main`.

use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://mate.academy/students-api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// 0 means not configured
    pub user_id: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: 0,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build from the compile-time environment. Bad values fall back to defaults.
    pub fn from_build_env() -> Self {
        let (config, errors) = Self::from_values(
            option_env!("TODO_API_URL"),
            option_env!("TODO_USER_ID"),
            option_env!("TODO_LOG"),
        );
        // Logger is not up yet, so go straight to the console
        for err in errors {
            web_sys::console::warn_1(&format!("[CONFIG] {}, using default", err).into());
        }
        config
    }

    /// Parse raw values. Each invalid value is reported and replaced by its default.
    pub fn from_values(
        api_base_url: Option<&str>,
        user_id: Option<&str>,
        log_level: Option<&str>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(url) = api_base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = user_id.map(str::trim).filter(|raw| !raw.is_empty()) {
            match raw.parse::<u32>() {
                Ok(id) => config.user_id = id,
                Err(_) => errors.push(ConfigError::InvalidUserId(raw.to_string())),
            }
        }

        if let Some(raw) = log_level.map(str::trim).filter(|raw| !raw.is_empty()) {
            match log::Level::from_str(raw) {
                Ok(level) => config.log_level = level,
                Err(_) => errors.push(ConfigError::InvalidLogLevel(raw.to_string())),
            }
        }

        (config, errors)
    }

    pub fn is_configured(&self) -> bool {
        self.user_id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unconfigured() {
        let (config, errors) = AppConfig::from_values(None, None, None);
        assert!(errors.is_empty());
        assert_eq!(config, AppConfig::default());
        assert!(!config.is_configured());
    }

    #[test]
    fn test_parses_values() {
        let (config, errors) =
            AppConfig::from_values(Some("http://localhost:3000/"), Some(" 2968 "), Some("debug"));

        assert!(errors.is_empty());
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.user_id, 2968);
        assert_eq!(config.log_level, log::Level::Debug);
        assert!(config.is_configured());
    }

    #[test]
    fn test_zero_user_id_is_unconfigured() {
        let (config, errors) = AppConfig::from_values(None, Some("0"), None);
        assert!(errors.is_empty());
        assert!(!config.is_configured());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let (config, errors) = AppConfig::from_values(None, Some("abc"), Some("loud"));

        assert_eq!(config.user_id, 0);
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(
            errors,
            vec![
                ConfigError::InvalidUserId("abc".to_string()),
                ConfigError::InvalidLogLevel("loud".to_string()),
            ]
        );
    }
}
