//! User interface module - console diagnostics and report formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting of report lines
//! - This module - Fatal diagnostics on the report stream and styled status notices

use std::io::{self, Write};

use console::style;

pub mod formatter;

pub use formatter::{
    format_branch_line, format_patterns, format_project_header, format_settings, DONE,
};

/// Write a fatal diagnostic as a plain line on the report stream.
///
/// The report and the reason it stopped must end up in the same capture.
pub fn report_fatal<W: Write + ?Sized>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message)?;
    out.flush()
}

/// Print a status message with a yellow arrow on stderr, keeping stdout for the report.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Line shown when a real (non dry-run) run is about to start.
pub fn live_run_notice(group: &str) -> String {
    format!("Dry-run disabled: branches in group '{}' will be deleted", group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_fatal_writes_plain_line() {
        let mut out = Vec::new();
        report_fatal(
            &mut out,
            "Failed to access group. Confirm group and check token permissions.",
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Failed to access group. Confirm group and check token permissions.\n"
        );
    }

    #[test]
    fn test_report_fatal_appends_after_report() {
        let mut out = b"> api\n".to_vec();
        report_fatal(&mut out, "Failed to delete branches. Check token permissions.").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "> api\nFailed to delete branches. Check token permissions.\n"
        );
    }

    #[test]
    fn test_live_run_notice_names_group() {
        assert_eq!(
            live_run_notice("acme"),
            "Dry-run disabled: branches in group 'acme' will be deleted"
        );
    }
}
