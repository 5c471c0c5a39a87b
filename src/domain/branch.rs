use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{DebranchError, Result};

/// Represents a branch of a project with the state needed to judge deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_default: bool,
    pub is_protected: bool,
    /// Date of the last commit, time of day discarded
    pub committed_on: NaiveDate,
}

impl Branch {
    /// Create an unprotected, non-default branch
    pub fn new(name: impl Into<String>, committed_on: NaiveDate) -> Self {
        Branch {
            name: name.into(),
            is_default: false,
            is_protected: false,
            committed_on,
        }
    }

    pub fn default_branch(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn protected(mut self) -> Self {
        self.is_protected = true;
        self
    }

    /// Only a branch that is both default and protected is shielded from deletion
    pub fn is_guarded(&self) -> bool {
        self.is_default && self.is_protected
    }

    /// Whole days between `now` and midnight of the last commit date
    pub fn age_in_days(&self, now: NaiveDateTime) -> i64 {
        (now - self.committed_on.and_time(NaiveTime::MIN)).num_days()
    }

    /// Stale means strictly older than the threshold
    pub fn is_stale(&self, now: NaiveDateTime, ignored_days: u32) -> bool {
        self.age_in_days(now) > i64::from(ignored_days)
    }
}

/// Parses the date portion (first 10 characters, `YYYY-MM-DD`) of a commit timestamp.
///
/// # Arguments
/// * `branch` - Branch name, used only for the error message
/// * `raw` - Timestamp as returned by the API, e.g. `2024-03-01T10:15:00.000+01:00`
pub fn parse_commit_date(branch: &str, raw: &str) -> Result<NaiveDate> {
    let invalid = || DebranchError::InvalidCommitDate {
        branch: branch.to_string(),
        value: raw.to_string(),
    };

    let date_part = raw.get(..10).ok_or_else(invalid)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| invalid())
}
