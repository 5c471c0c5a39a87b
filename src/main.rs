use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use gitlab_debranch::cli::run;
use gitlab_debranch::clock::SystemClock;
use gitlab_debranch::config;
use gitlab_debranch::gitlab::HttpGitLab;
use gitlab_debranch::logging;
use gitlab_debranch::settings::{self, CliOptions};
use gitlab_debranch::ui;

#[derive(clap::Parser)]
#[command(
    name = "gitlab-debranch",
    version,
    about = "Delete stale branches across all projects of a GitLab group"
)]
struct Args {
    #[arg(
        short,
        long,
        env = "GITLAB_TOKEN",
        hide_env_values = true,
        help = "GitLab token (usually a personal access token) with api access scope"
    )]
    token: String,

    #[arg(short, long, help = "GitLab group to clean up, by id or full path")]
    group: String,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Ignore branches where last commit is recent. Defaults to 90"
    )]
    ignored_days: Option<i64>,

    #[arg(
        long,
        num_args = 0..,
        help = "Ignore these projects. Exact or partial matching (begins with) allowed"
    )]
    ignored_projects: Option<Vec<String>>,

    #[arg(
        long,
        num_args = 0..,
        help = "Ignore these branches. Exact or partial matching (begins with) allowed"
    )]
    ignored_branches: Option<Vec<String>>,

    #[arg(
        long,
        num_args = 0..,
        help = "Include only these projects. Exact or partial matching (begins with) allowed"
    )]
    only_projects: Option<Vec<String>>,

    #[arg(
        long,
        num_args = 0..,
        help = "Include only these branches. Exact or partial matching (begins with) allowed"
    )]
    only_branches: Option<Vec<String>>,

    #[arg(
        long,
        overrides_with = "no_dry_run",
        help = "Dry-run mode (default) does not apply any changes"
    )]
    dry_run: bool,

    #[arg(long, overrides_with = "dry_run", help = "Actually delete the branches")]
    no_dry_run: bool,

    #[arg(long, help = "GitLab REST API root [default: https://gitlab.com/api/v4]")]
    api_url: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print debug diagnostics to stderr")]
    verbose: bool,
}

impl Args {
    fn into_options(self) -> CliOptions {
        let dry_run = if self.no_dry_run {
            Some(false)
        } else if self.dry_run {
            Some(true)
        } else {
            None
        };

        CliOptions {
            group: self.group,
            token: self.token,
            api_url: self.api_url,
            ignored_days: self.ignored_days,
            ignored_projects: self.ignored_projects,
            only_projects: self.only_projects,
            ignored_branches: self.ignored_branches,
            only_branches: self.only_branches,
            dry_run,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let file_config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;
    let settings = settings::resolve(args.into_options(), &file_config)
        .context("Invalid arguments")?;

    if !settings.dry_run {
        ui::display_status(&ui::live_run_notice(&settings.group_id));
    }

    let gitlab = HttpGitLab::from_settings(&settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&settings, &gitlab, &SystemClock, &mut out) {
        debug!(error = ?e, status = ?e.status(), "run aborted");
        ui::report_fatal(&mut out, &e.to_string()).context("Failed to write report")?;
        std::process::exit(1);
    }

    Ok(())
}
