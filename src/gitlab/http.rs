use std::time::Duration;

use tracing::debug;
use url::form_urlencoded;

use crate::domain::{Branch, Project};
use crate::error::{DebranchError, Result};
use crate::gitlab::models::{BranchItem, GroupItem};
use crate::gitlab::GitLabApi;
use crate::settings::{AccessToken, Settings};

/// Header carrying the personal access token on every request.
const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Blocking GitLab REST client.
pub struct HttpGitLab {
    agent: ureq::Agent,
    api_url: String,
    token: AccessToken,
}

impl HttpGitLab {
    /// Creates a client for the given API root (e.g. `https://gitlab.com/api/v4`).
    pub fn new(api_url: impl Into<String>, token: AccessToken, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        HttpGitLab {
            agent,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.api_url.clone(),
            settings.token.clone(),
            settings.timeout,
        )
    }

    /// Group resource URL; full paths such as `parent/child` are encoded into one segment.
    pub fn group_url(&self, group_id: &str) -> String {
        format!("{}/groups/{}", self.api_url, encode_segment(group_id))
    }

    /// Branch resource URL under a project link.
    pub fn branch_url(project: &Project, branch: &str) -> String {
        format!("{}/{}", project.branches_url(), encode_segment(branch))
    }

    fn get(&self, url: &str) -> std::result::Result<ureq::Response, ureq::Error> {
        debug!(method = "GET", url, "gitlab request");
        self.agent
            .get(url)
            .set(TOKEN_HEADER, self.token.expose())
            .call()
    }

    fn delete(&self, url: &str) -> std::result::Result<ureq::Response, ureq::Error> {
        debug!(method = "DELETE", url, "gitlab request");
        self.agent
            .delete(url)
            .set(TOKEN_HEADER, self.token.expose())
            .call()
    }
}

/// Percent-encodes a value for use as a single path segment.
pub fn encode_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Status code carried by a failed call, `None` for transport failures.
fn failure_status(url: &str, err: ureq::Error) -> Option<u16> {
    match err {
        ureq::Error::Status(code, _) => Some(code),
        ureq::Error::Transport(transport) => {
            debug!(url, error = %transport, "gitlab request did not complete");
            None
        }
    }
}

/// Succeeds only on the exact expected status; ureq treats every 2xx as success.
fn expect_status(
    url: &str,
    outcome: std::result::Result<ureq::Response, ureq::Error>,
    expected: u16,
) -> std::result::Result<ureq::Response, Option<u16>> {
    match outcome {
        Ok(response) if response.status() == expected => Ok(response),
        Ok(response) => Err(Some(response.status())),
        Err(err) => Err(failure_status(url, err)),
    }
}

impl GitLabApi for HttpGitLab {
    fn list_group_projects(&self, group_id: &str) -> Result<Vec<Project>> {
        let url = self.group_url(group_id);
        let response = expect_status(&url, self.get(&url), 200).map_err(|status| {
            DebranchError::GroupAccess {
                group: group_id.to_string(),
                status,
            }
        })?;

        let group: GroupItem = response
            .into_json()
            .map_err(|e| DebranchError::invalid_response(&url, e.to_string()))?;
        debug!(group = group_id, count = group.projects.len(), "listed projects");
        Ok(group.projects.into_iter().map(Project::from).collect())
    }

    fn list_branches(&self, project: &Project) -> Result<Vec<Branch>> {
        let url = project.branches_url();
        let response = expect_status(&url, self.get(&url), 200).map_err(|status| {
            DebranchError::BranchFetch {
                project: project.name.clone(),
                status,
            }
        })?;

        let items: Vec<BranchItem> = response
            .into_json()
            .map_err(|e| DebranchError::invalid_response(&url, e.to_string()))?;
        debug!(project = %project.name, count = items.len(), "listed branches");
        items.into_iter().map(BranchItem::into_branch).collect()
    }

    fn delete_branch(&self, project: &Project, branch: &str) -> Result<()> {
        let url = Self::branch_url(project, branch);
        expect_status(&url, self.delete(&url), 204).map_err(|status| {
            DebranchError::BranchDelete {
                project: project.name.clone(),
                branch: branch.to_string(),
                status,
            }
        })?;
        Ok(())
    }
}
