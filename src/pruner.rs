//! Branch pruning: decides which branches of a project are stale and removes them.

use std::io::Write;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::domain::{Branch, Project};
use crate::error::Result;
use crate::filter::matches;
use crate::gitlab::GitLabApi;
use crate::settings::Settings;
use crate::ui::formatter::{format_branch_line, format_project_header};

/// Outcome of pruning a single project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneReport {
    pub project: String,
    /// Branches reported as removed (or removable, in dry-run), in listing order
    pub branches: Vec<String>,
    /// Deletion requests that actually succeeded
    pub deleted: usize,
}

/// Narrows a branch listing to the branches eligible for deletion.
///
/// Steps, in order: drop branches that are both default and protected, drop names
/// matching `ignored_branches`, keep only names matching `only_branches` when present,
/// keep only branches strictly older than `ignored_days` whole days at `now`.
pub fn eligible_branches(
    branches: Vec<Branch>,
    settings: &Settings,
    now: NaiveDateTime,
) -> Vec<Branch> {
    let ignored = settings.ignored_branches.as_deref();
    let only = settings.only_branches.as_deref();

    branches
        .into_iter()
        .filter(|b| !b.is_guarded())
        .filter(|b| !matches(&b.name, ignored))
        .filter(|b| only.is_none() || matches(&b.name, only))
        .filter(|b| b.is_stale(now, settings.ignored_days))
        .collect()
}

/// Prunes one project and writes its report to `out`.
///
/// The clock is read once, before the branch listing. The project header is written
/// even when nothing is eligible. Outside dry-run each branch line is written only after
/// its deletion succeeded; the first failure aborts with the remaining branches untouched.
///
/// # Returns
/// * `Ok(PruneReport)` - Every eligible branch was handled
/// * `Err(DebranchError::BranchFetch)` - The branch listing failed
/// * `Err(DebranchError::BranchDelete)` - A deletion failed
pub fn prune_branches<G, C, W>(
    api: &G,
    clock: &C,
    project: &Project,
    settings: &Settings,
    out: &mut W,
) -> Result<PruneReport>
where
    G: GitLabApi + ?Sized,
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    let now = clock.now();
    let branches = api.list_branches(project)?;
    let total = branches.len();
    let eligible = eligible_branches(branches, settings, now);
    debug!(
        project = %project.name,
        total,
        eligible = eligible.len(),
        "filtered branches"
    );

    writeln!(out, "{}", format_project_header(&project.name))?;

    let mut report = PruneReport {
        project: project.name.clone(),
        branches: Vec::with_capacity(eligible.len()),
        deleted: 0,
    };

    for branch in eligible {
        if !settings.dry_run {
            api.delete_branch(project, &branch.name)?;
            report.deleted += 1;
            info!(project = %project.name, branch = %branch.name, "deleted branch");
        }
        writeln!(out, "{}", format_branch_line(&branch.name))?;
        report.branches.push(branch.name);
    }

    Ok(report)
}
