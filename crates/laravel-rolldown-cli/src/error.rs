//! CLI error types.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// The dev server could not bind its listener.
    #[error("Failed to bind dev server to {addr}: {source}")]
    #[diagnostic(
        code(laravel::cli::bind_failed),
        help("Is another dev server already running on that port?")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors from the bridge library (hot file, server handle).
    #[error(transparent)]
    #[diagnostic(transparent)]
    Bridge(#[from] laravel_rolldown::BridgeError),

    /// The HTTP server failed while running.
    #[error("Dev server error: {0}")]
    #[diagnostic(code(laravel::cli::server))]
    Server(#[from] std::io::Error),

    /// JSON serialization of the config fragment failed.
    #[error("Failed to serialize config fragment: {0}")]
    #[diagnostic(code(laravel::cli::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let err = CliError::Bind {
            addr: "127.0.0.1:5173".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:5173"));
        assert!(msg.contains("in use"));
    }

    #[test]
    fn test_bridge_error_passes_through() {
        let bridge = laravel_rolldown::BridgeError::Listening(std::io::Error::new(
            std::io::ErrorKind::Other,
            "never listened",
        ));
        let err: CliError = bridge.into();
        assert!(err.to_string().contains("never listened"));
    }
}
