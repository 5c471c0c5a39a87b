//! Domain logic - projects and branches as fetched from GitLab, independent of transport

pub mod branch;
pub mod project;

pub use branch::{parse_commit_date, Branch};
pub use project::Project;
