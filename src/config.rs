use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{DebranchError, Result};

/// Default REST endpoint of gitlab.com.
pub const DEFAULT_API_URL: &str = "https://gitlab.com/api/v4";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Optional file configuration for gitlab-debranch.
///
/// Holds connection settings and default filters. Command line flags override it key by key.
/// The access token and the dry-run switch are deliberately not accepted here: unknown keys
/// are rejected, so a `token` or `dry_run` entry is a load error.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub filters: FiltersConfig,
}

/// Default filters applied when the matching flag is not given.
///
/// An absent list means "no constraint"; an empty list is kept as an explicit empty set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct FiltersConfig {
    #[serde(default)]
    pub ignored_days: Option<i64>,

    #[serde(default)]
    pub ignored_projects: Option<Vec<String>>,

    #[serde(default)]
    pub only_projects: Option<Vec<String>>,

    #[serde(default)]
    pub ignored_branches: Option<Vec<String>>,

    #[serde(default)]
    pub only_branches: Option<Vec<String>>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            filters: FiltersConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `debranch.toml` in current directory
/// 3. `.debranch.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| DebranchError::config(format!("cannot read {}: {}", path, e)))?
    } else if Path::new("./debranch.toml").exists() {
        fs::read_to_string("./debranch.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".debranch.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses TOML configuration text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| DebranchError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://gitlab.com/api/v4");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.filters, FiltersConfig::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_filters_section() {
        let config = parse_config(
            r#"
api_url = "https://git.example.org/api/v4"

[filters]
ignored_days = 30
ignored_branches = ["release/", "hotfix/"]
only_projects = []
"#,
        )
        .unwrap();

        assert_eq!(config.api_url, "https://git.example.org/api/v4");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.filters.ignored_days, Some(30));
        assert_eq!(
            config.filters.ignored_branches,
            Some(vec!["release/".to_string(), "hotfix/".to_string()])
        );
        assert_eq!(config.filters.only_projects, Some(Vec::new()));
        assert_eq!(config.filters.ignored_projects, None);
    }

    #[test]
    fn test_token_is_rejected() {
        let result = parse_config(r#"token = "glpat-secret""#);
        assert!(matches!(result, Err(DebranchError::Config(_))));
    }

    #[test]
    fn test_dry_run_is_rejected() {
        let result = parse_config("[filters]\ndry_run = false\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_custom_path_is_error() {
        let result = load_config(Some("/nonexistent/debranch.toml"));
        assert!(matches!(result, Err(DebranchError::Config(_))));
    }
}
