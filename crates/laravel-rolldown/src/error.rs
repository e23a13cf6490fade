//! Error types for the Laravel bridge.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the bridge.
///
/// The taxonomy is deliberately narrow: version detection and banner
/// output are best-effort and never error; entrypoint validation belongs
/// to the host bundler. What remains is marker-file I/O and the dev
/// server failing to report a bound address.
#[derive(Debug, Error, Diagnostic)]
pub enum BridgeError {
    /// The hot-reload marker could not be written.
    #[error("Failed to write hot file {}: {source}", .path.display())]
    #[diagnostic(
        code(laravel::hot::write_failed),
        help("Check that the public directory exists and is writable")
    )]
    HotFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The hot-reload marker existed but could not be removed.
    #[error("Failed to remove hot file {}: {source}", .path.display())]
    #[diagnostic(code(laravel::hot::remove_failed))]
    HotFileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dev server never reported a bound address.
    #[error("Dev server failed to report its address: {0}")]
    #[diagnostic(
        code(laravel::server::listening_failed),
        help("The dev server transport must reach its listening state before the hook can announce it")
    )]
    Listening(#[from] std::io::Error),
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;
