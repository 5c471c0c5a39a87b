//! GitLab API abstraction layer
//!
//! The pipeline needs exactly three remote capabilities: list the projects of a group,
//! list the branches of a project, and delete a branch by name. They are captured by
//! the [GitLabApi] trait so the selection and pruning logic can run against either:
//!
//! - [http::HttpGitLab]: blocking REST client built on `ureq`
//! - [mock::MockGitLab]: in-memory double for tests
//!
//! # Limitations
//!
//! Every listing is a single unpaginated request. Groups or projects with more entries
//! than the server's default page size are silently truncated.

pub mod http;
pub mod mock;
pub(crate) mod models;

pub use http::HttpGitLab;
pub use mock::MockGitLab;

use crate::domain::{Branch, Project};
use crate::error::Result;

/// Remote operations consumed by the project selector and branch pruner
///
/// ## Error Handling
///
/// Any non-success answer must surface as the matching fatal variant of
/// [crate::error::DebranchError]: `GroupAccess`, `BranchFetch` or `BranchDelete`.
/// Callers never retry.
pub trait GitLabApi: Send + Sync {
    /// List every project of a group, archived ones included, in server order
    ///
    /// # Arguments
    /// * `group_id` - Numeric id or full path of the group (e.g. "42", "acme/platform")
    fn list_group_projects(&self, group_id: &str) -> Result<Vec<Project>>;

    /// List the branches of a project in server order
    fn list_branches(&self, project: &Project) -> Result<Vec<Branch>>;

    /// Delete a branch of a project by name
    ///
    /// # Returns
    /// * `Ok(())` - The server confirmed the deletion
    /// * `Err(DebranchError::BranchDelete)` - Anything else
    fn delete_branch(&self, project: &Project, branch: &str) -> Result<()>;
}
