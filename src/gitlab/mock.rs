use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::{Branch, Project};
use crate::error::{DebranchError, Result};
use crate::gitlab::GitLabApi;

/// In-memory GitLab for testing without network access
///
/// Records every branch listing and deletion so tests can assert on what the
/// pipeline actually requested.
#[derive(Default)]
pub struct MockGitLab {
    projects: Vec<Project>,
    branches: HashMap<String, Vec<Branch>>,
    group_failure: Option<u16>,
    fetch_failures: HashMap<String, u16>,
    delete_failures: HashMap<(String, String), u16>,
    listed: Mutex<Vec<String>>,
    deleted: Mutex<Vec<(String, String)>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockGitLab {
    /// Create an empty mock with no projects
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project to the group listing, archived or not
    pub fn add_project(&mut self, project: Project) {
        self.branches.entry(project.name.clone()).or_default();
        self.projects.push(project);
    }

    /// Add a branch to a previously added project
    pub fn add_branch(&mut self, project: &str, branch: Branch) {
        self.branches
            .entry(project.to_string())
            .or_default()
            .push(branch);
    }

    /// Make the group listing answer with `status`
    pub fn fail_group_listing(&mut self, status: u16) {
        self.group_failure = Some(status);
    }

    /// Make the branch listing of `project` answer with `status`
    pub fn fail_branch_listing(&mut self, project: &str, status: u16) {
        self.fetch_failures.insert(project.to_string(), status);
    }

    /// Make deleting `branch` in `project` answer with `status`
    pub fn fail_deletion(&mut self, project: &str, branch: &str, status: u16) {
        self.delete_failures
            .insert((project.to_string(), branch.to_string()), status);
    }

    /// Projects whose branches were requested, in request order
    pub fn listed_projects(&self) -> Vec<String> {
        lock(&self.listed).clone()
    }

    /// `(project, branch)` pairs deleted successfully, in request order
    pub fn deleted(&self) -> Vec<(String, String)> {
        lock(&self.deleted).clone()
    }
}

impl GitLabApi for MockGitLab {
    fn list_group_projects(&self, group_id: &str) -> Result<Vec<Project>> {
        if let Some(status) = self.group_failure {
            return Err(DebranchError::GroupAccess {
                group: group_id.to_string(),
                status: Some(status),
            });
        }
        Ok(self.projects.clone())
    }

    fn list_branches(&self, project: &Project) -> Result<Vec<Branch>> {
        lock(&self.listed).push(project.name.clone());
        if let Some(status) = self.fetch_failures.get(&project.name) {
            return Err(DebranchError::BranchFetch {
                project: project.name.clone(),
                status: Some(*status),
            });
        }
        Ok(self
            .branches
            .get(&project.name)
            .cloned()
            .unwrap_or_default())
    }

    fn delete_branch(&self, project: &Project, branch: &str) -> Result<()> {
        let key = (project.name.clone(), branch.to_string());
        if let Some(status) = self.delete_failures.get(&key) {
            return Err(DebranchError::BranchDelete {
                project: key.0,
                branch: key.1,
                status: Some(*status),
            });
        }
        lock(&self.deleted).push(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_mock_lists_in_insertion_order() {
        let mut gitlab = MockGitLab::new();
        gitlab.add_project(Project::new("b", "mock://b"));
        gitlab.add_project(Project::new("a", "mock://a"));

        let names: Vec<String> = gitlab
            .list_group_projects("acme")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_mock_branches_and_deletions() {
        let mut gitlab = MockGitLab::new();
        let project = Project::new("api", "mock://api");
        gitlab.add_project(project.clone());
        gitlab.add_branch("api", Branch::new("feature/x", day()));

        assert_eq!(gitlab.list_branches(&project).unwrap().len(), 1);
        gitlab.delete_branch(&project, "feature/x").unwrap();

        assert_eq!(gitlab.listed_projects(), vec!["api"]);
        assert_eq!(
            gitlab.deleted(),
            vec![("api".to_string(), "feature/x".to_string())]
        );
    }

    #[test]
    fn test_mock_failures() {
        let mut gitlab = MockGitLab::new();
        let project = Project::new("api", "mock://api");
        gitlab.add_project(project.clone());
        gitlab.fail_branch_listing("api", 403);
        gitlab.fail_deletion("api", "wip", 500);

        assert_eq!(gitlab.list_branches(&project).unwrap_err().status(), Some(403));
        assert_eq!(
            gitlab.delete_branch(&project, "wip").unwrap_err().status(),
            Some(500)
        );
        assert!(gitlab.deleted().is_empty());

        gitlab.fail_group_listing(401);
        assert!(matches!(
            gitlab.list_group_projects("acme"),
            Err(DebranchError::GroupAccess { .. })
        ));
    }
}
