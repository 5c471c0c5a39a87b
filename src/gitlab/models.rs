//! Wire shapes of the GitLab REST responses consumed by [super::HttpGitLab].

use serde::Deserialize;

use crate::domain::{parse_commit_date, Branch, Project};
use crate::error::Result;

#[derive(Debug, Deserialize)]
pub(crate) struct GroupItem {
    #[serde(default)]
    pub(crate) projects: Vec<ProjectItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectItem {
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) archived: bool,
    #[serde(rename = "_links")]
    pub(crate) links: ProjectLinks,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectLinks {
    #[serde(rename = "self")]
    pub(crate) self_link: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchItem {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) default: bool,
    #[serde(default)]
    pub(crate) protected: bool,
    pub(crate) commit: CommitItem,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommitItem {
    pub(crate) committed_date: String,
}

impl From<ProjectItem> for Project {
    fn from(item: ProjectItem) -> Self {
        Project {
            name: item.path,
            link: item.links.self_link,
            archived: item.archived,
        }
    }
}

impl BranchItem {
    pub(crate) fn into_branch(self) -> Result<Branch> {
        let committed_on = parse_commit_date(&self.name, &self.commit.committed_date)?;
        Ok(Branch {
            name: self.name,
            is_default: self.default,
            is_protected: self.protected,
            committed_on,
        })
    }
}
