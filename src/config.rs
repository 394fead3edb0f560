use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration, read once at startup from
/// `$DEXBAR_HOME/config.toml` (default `~/.dexbar/config.toml`).
///
/// Poll cadence is owned by the menu-bar host that invokes the binary, so it
/// is deliberately absent here.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub account_name: String,
    pub password: String,
    /// Dexcom runs separate Share databases for US and rest-of-world
    /// accounts; this flag selects the endpoint.
    #[serde(default)]
    pub outside_us: bool,
    #[serde(default = "default_low_threshold")]
    pub low_threshold: i32,
    #[serde(default = "default_high_threshold")]
    pub high_threshold: i32,
    #[serde(default = "default_threshold_deviation")]
    pub threshold_deviation: i32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_low_threshold() -> i32 {
    65
}

fn default_high_threshold() -> i32 {
    200
}

fn default_threshold_deviation() -> i32 {
    5
}

fn default_request_timeout_secs() -> u64 {
    30
}

pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;
    let content = std::fs::read_to_string(&config_path).with_context(|| {
        format!(
            "Failed to read config.toml from {}. Create it with at least account_name and password.",
            config_path.display()
        )
    })?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))
}

fn get_config_path() -> Result<PathBuf> {
    let dexbar_home = std::env::var("DEXBAR_HOME")
        .ok()
        .filter(|s| !s.trim().is_empty());

    let base = if let Some(home) = dexbar_home {
        PathBuf::from(home)
    } else {
        dirs::home_dir()
            .context("Could not determine home directory")?
            .join(".dexbar")
    };

    Ok(base.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            account_name = "publisher"
            password = "hunter2"
            outside_us = true
            low_threshold = 70
            high_threshold = 180
            threshold_deviation = 10
            request_timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.account_name, "publisher");
        assert_eq!(config.password, "hunter2");
        assert!(config.outside_us);
        assert_eq!(config.low_threshold, 70);
        assert_eq!(config.high_threshold, 180);
        assert_eq!(config.threshold_deviation, 10);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_parse_minimal_config_applies_defaults() {
        let config: Config = toml::from_str(
            r#"
            account_name = "publisher"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert!(!config.outside_us);
        assert_eq!(config.low_threshold, 65);
        assert_eq!(config.high_threshold, 200);
        assert_eq!(config.threshold_deviation, 5);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("outside_us = true");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_default() {
        let path = get_config_path().unwrap();
        assert!(path.ends_with(".dexbar/config.toml"));
    }
}
