//! Effective run configuration, resolved once from command line options and file config.

use std::fmt;
use std::time::Duration;

use crate::config::{Config, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{DebranchError, Result};

/// Threshold used when none is given or a negative one is.
pub const DEFAULT_IGNORED_DAYS: u32 = 90;

/// Opaque GitLab credential. Its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    /// Raw value, for the request header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Immutable configuration shared by every stage of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub group_id: String,
    pub token: AccessToken,
    pub api_url: String,
    pub timeout: Duration,
    pub ignored_days: u32,
    pub ignored_projects: Option<Vec<String>>,
    pub only_projects: Option<Vec<String>>,
    pub ignored_branches: Option<Vec<String>>,
    pub only_branches: Option<Vec<String>>,
    pub dry_run: bool,
}

impl Settings {
    /// Settings with default threshold, no filters and dry-run on
    pub fn new(group_id: impl Into<String>, token: AccessToken) -> Self {
        Settings {
            group_id: group_id.into(),
            token,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            ignored_days: DEFAULT_IGNORED_DAYS,
            ignored_projects: None,
            only_projects: None,
            ignored_branches: None,
            only_branches: None,
            dry_run: true,
        }
    }
}

/// Command line input before merging, decoupled from clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliOptions {
    pub group: String,
    pub token: String,
    pub api_url: Option<String>,
    pub ignored_days: Option<i64>,
    pub ignored_projects: Option<Vec<String>>,
    pub only_projects: Option<Vec<String>>,
    pub ignored_branches: Option<Vec<String>>,
    pub only_branches: Option<Vec<String>>,
    /// `Some(false)` only when real deletion was explicitly requested
    pub dry_run: Option<bool>,
}

/// Maps a negative threshold to the default.
pub fn normalize_ignored_days(days: i64) -> u32 {
    if days < 0 {
        DEFAULT_IGNORED_DAYS
    } else {
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

/// Merges command line options over file configuration and validates the result.
///
/// # Returns
/// * `Ok(Settings)` - Effective settings
/// * `Err(DebranchError::Config)` - Empty group or token, a non-HTTP API URL, or a zero timeout
pub fn resolve(cli: CliOptions, file: &Config) -> Result<Settings> {
    let group_id = cli.group.trim().to_string();
    if group_id.is_empty() {
        return Err(DebranchError::config("group must not be empty"));
    }
    if cli.token.trim().is_empty() {
        return Err(DebranchError::config("token must not be empty"));
    }

    let api_url = cli
        .api_url
        .unwrap_or_else(|| file.api_url.clone())
        .trim_end_matches('/')
        .to_string();
    if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
        return Err(DebranchError::config(format!(
            "api url must start with http:// or https://, got '{}'",
            api_url
        )));
    }

    if file.timeout_secs == 0 {
        return Err(DebranchError::config("timeout_secs must be at least 1"));
    }

    let filters = &file.filters;
    let ignored_days = cli
        .ignored_days
        .or(filters.ignored_days)
        .map(normalize_ignored_days)
        .unwrap_or(DEFAULT_IGNORED_DAYS);

    Ok(Settings {
        group_id,
        token: AccessToken::new(cli.token),
        api_url,
        timeout: Duration::from_secs(file.timeout_secs),
        ignored_days,
        ignored_projects: cli
            .ignored_projects
            .or_else(|| filters.ignored_projects.clone()),
        only_projects: cli.only_projects.or_else(|| filters.only_projects.clone()),
        ignored_branches: cli
            .ignored_branches
            .or_else(|| filters.ignored_branches.clone()),
        only_branches: cli.only_branches.or_else(|| filters.only_branches.clone()),
        dry_run: cli.dry_run != Some(false),
    })
}
