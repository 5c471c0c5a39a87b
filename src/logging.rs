//! Diagnostic tracing, separate from the branch report.
//!
//! The report (settings echo, project and branch lines, `Done!`) is product output on
//! stdout. Tracing goes to stderr and is silent at the default `warn` level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "gitlab_debranch=debug"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over `verbose` when set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "gitlab_debranch=debug");
    }
}
