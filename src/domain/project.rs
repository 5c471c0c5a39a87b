/// A repository inside a GitLab group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project path within the group; also its identity
    pub name: String,
    /// Self link of the project resource, base for branch operations
    pub link: String,
    pub archived: bool,
}

impl Project {
    /// Create an active (non-archived) project
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Project {
            name: name.into(),
            link: link.into(),
            archived: false,
        }
    }

    /// Mark the project as archived
    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// Endpoint listing the project's branches
    pub fn branches_url(&self) -> String {
        format!("{}/repository/branches", self.link.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_is_active() {
        let project = Project::new("api", "https://gitlab.com/api/v4/projects/1");
        assert!(!project.archived);
        assert!(project.archived().archived);
    }

    #[test]
    fn test_branches_url() {
        let project = Project::new("api", "https://gitlab.com/api/v4/projects/1");
        assert_eq!(
            project.branches_url(),
            "https://gitlab.com/api/v4/projects/1/repository/branches"
        );
    }

    #[test]
    fn test_branches_url_trailing_slash() {
        let project = Project::new("api", "https://gitlab.com/api/v4/projects/1/");
        assert_eq!(
            project.branches_url(),
            "https://gitlab.com/api/v4/projects/1/repository/branches"
        );
    }
}
