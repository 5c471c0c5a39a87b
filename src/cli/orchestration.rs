//! Main workflow orchestration logic
//!
//! Composes the project selector and the branch pruner into one run. Kept apart from
//! argument parsing so the whole pipeline can be driven programmatically with any
//! [GitLabApi], [Clock] and output sink.

use std::io::Write;

use tracing::info;

use crate::clock::Clock;
use crate::error::Result;
use crate::gitlab::GitLabApi;
use crate::pruner::{prune_branches, PruneReport};
use crate::selector::select_projects;
use crate::settings::Settings;
use crate::ui::formatter::{format_settings, DONE};

/// Result of a run that reached `Done!`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Per-project reports in processing order
    pub projects: Vec<PruneReport>,
}

impl RunSummary {
    /// Branches reported across all projects
    pub fn reported(&self) -> usize {
        self.projects.iter().map(|p| p.branches.len()).sum()
    }

    /// Branches actually deleted across all projects
    pub fn deleted(&self) -> usize {
        self.projects.iter().map(|p| p.deleted).sum()
    }
}

/// Runs the whole pipeline for one group.
///
/// 1. Echo the effective settings
/// 2. Select target projects
/// 3. Prune each project in listing order
/// 4. Print `Done!`
///
/// The first error aborts the run; deletions already performed stay done.
pub fn run<G, C, W>(settings: &Settings, api: &G, clock: &C, out: &mut W) -> Result<RunSummary>
where
    G: GitLabApi + ?Sized,
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", format_settings(settings))?;

    let projects = select_projects(
        api,
        &settings.group_id,
        settings.ignored_projects.as_deref(),
        settings.only_projects.as_deref(),
    )?;

    let mut summary = RunSummary::default();
    for project in &projects {
        let report = prune_branches(api, clock, project, settings, out)?;
        summary.projects.push(report);
    }

    writeln!(out, "{}", DONE)?;
    out.flush()?;

    info!(
        group = %settings.group_id,
        projects = summary.projects.len(),
        reported = summary.reported(),
        deleted = summary.deleted(),
        dry_run = settings.dry_run,
        "run finished"
    );
    Ok(summary)
}
