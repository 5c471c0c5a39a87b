use thiserror::Error;

/// Unified error type for gitlab-debranch operations
///
/// The three access variants are fatal by construction: the pipeline stops at the
/// first one and the binary exits non-zero after printing its message.
#[derive(Error, Debug)]
pub enum DebranchError {
    #[error("Failed to access group. Confirm group and check token permissions.")]
    GroupAccess { group: String, status: Option<u16> },

    #[error("Failed to fetch branches. Check token permissions.")]
    BranchFetch { project: String, status: Option<u16> },

    #[error("Failed to delete branches. Check token permissions.")]
    BranchDelete {
        project: String,
        branch: String,
        status: Option<u16>,
    },

    #[error("Unexpected response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    #[error("Invalid commit date '{value}' on branch '{branch}'")]
    InvalidCommitDate { branch: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitlab-debranch
pub type Result<T> = std::result::Result<T, DebranchError>;

impl DebranchError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DebranchError::Config(msg.into())
    }

    /// Create a decoding error for the given request URL
    pub fn invalid_response(url: impl Into<String>, reason: impl Into<String>) -> Self {
        DebranchError::InvalidResponse {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status that caused the failure, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            DebranchError::GroupAccess { status, .. }
            | DebranchError::BranchFetch { status, .. }
            | DebranchError::BranchDelete { status, .. } => *status,
            _ => None,
        }
    }
}
