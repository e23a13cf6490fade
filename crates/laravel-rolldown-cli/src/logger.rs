//! Logging setup for the CLI, built on the `tracing` ecosystem.
//!
//! Verbosity resolution order: `--verbose` (debug), `--quiet` (errors
//! only), the `RUST_LOG` environment variable, then the info-level
//! default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber. Call once, before logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("laravel_rolldown=debug,laravel_rolldown_cli=debug")
    } else if quiet {
        EnvFilter::new("laravel_rolldown=error,laravel_rolldown_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("laravel_rolldown=info,laravel_rolldown_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether colored output should be enabled for this terminal.
///
/// Honors the `NO_COLOR` and `FORCE_COLOR` conventions before falling back
/// to terminal capability detection.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_construct() {
        // The subscriber is global and can only be installed once per
        // process, so only the filter construction is exercised here.
        let _ = EnvFilter::new("laravel_rolldown=debug,laravel_rolldown_cli=debug");
        let _ = EnvFilter::new("laravel_rolldown=error,laravel_rolldown_cli=error");
    }
}
