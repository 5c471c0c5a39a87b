//! Pure formatting functions for report output.
//!
//! Everything here returns a `String` so the pipeline can write reports into any
//! `io::Write`. Styling is left to the `display_*` helpers in the parent module.

use crate::settings::Settings;

/// Final line of a successful run.
pub const DONE: &str = "Done!";

/// Header line introducing a project's branches.
pub fn format_project_header(project: &str) -> String {
    format!("> {}", project)
}

/// Report line for a removed (or removable) branch.
pub fn format_branch_line(branch: &str) -> String {
    format!("  |- {}", branch)
}

/// Renders an optional pattern list; absent and empty are shown differently.
pub fn format_patterns(patterns: Option<&[String]>) -> String {
    match patterns {
        None => "unset".to_string(),
        Some(items) => format!("[{}]", items.join(", ")),
    }
}

/// Echo of the effective configuration, printed before any request.
///
/// The access token is never part of it.
pub fn format_settings(settings: &Settings) -> String {
    let rows = [
        ("--group", settings.group_id.clone()),
        ("--api-url", settings.api_url.clone()),
        ("--ignored-days", settings.ignored_days.to_string()),
        (
            "--ignored-projects",
            format_patterns(settings.ignored_projects.as_deref()),
        ),
        (
            "--ignored-branches",
            format_patterns(settings.ignored_branches.as_deref()),
        ),
        (
            "--only-projects",
            format_patterns(settings.only_projects.as_deref()),
        ),
        (
            "--only-branches",
            format_patterns(settings.only_branches.as_deref()),
        ),
        ("--dry-run", settings.dry_run.to_string()),
    ];

    let mut text = String::from("Running with the following arguments:\n");
    for (flag, value) in rows {
        text.push_str(&format!("{:<18}: {}\n", flag, value));
    }
    text
}
