//! Project selection: which projects of a group are considered at all.

use tracing::debug;

use crate::domain::Project;
use crate::error::Result;
use crate::filter::matches;
use crate::gitlab::GitLabApi;

/// Narrows a project listing, preserving its order.
///
/// Archived projects are dropped first, then names matching `ignored`. When `only` is
/// present (even empty) just the names matching it survive.
pub fn filter_projects(
    projects: Vec<Project>,
    ignored: Option<&[String]>,
    only: Option<&[String]>,
) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|p| !p.archived)
        .filter(|p| !matches(&p.name, ignored))
        .filter(|p| only.is_none() || matches(&p.name, only))
        .collect()
}

/// Fetches the projects of a group and applies [filter_projects].
///
/// # Returns
/// * `Ok(Vec<Project>)` - Target projects in listing order
/// * `Err(DebranchError::GroupAccess)` - The group could not be listed
pub fn select_projects<G: GitLabApi + ?Sized>(
    api: &G,
    group_id: &str,
    ignored: Option<&[String]>,
    only: Option<&[String]>,
) -> Result<Vec<Project>> {
    let all = api.list_group_projects(group_id)?;
    let total = all.len();
    let selected = filter_projects(all, ignored, only);
    debug!(group = group_id, total, selected = selected.len(), "selected projects");
    Ok(selected)
}
