//! Best-effort Laravel version detection.
//!
//! Reads `composer.lock` and looks for the `laravel/framework` package
//! record. Absence is a normal, expected outcome: a missing lockfile,
//! invalid JSON or a record without a version all yield `None`. The result
//! is only ever used for the startup banner.

use serde::Deserialize;
use std::path::Path;

const FRAMEWORK_PACKAGE: &str = "laravel/framework";

#[derive(Debug, Deserialize)]
struct ComposerLock {
    #[serde(default)]
    packages: Vec<ComposerPackage>,
}

#[derive(Debug, Deserialize)]
struct ComposerPackage {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: Option<String>,
}

/// The Laravel framework version recorded in `<dir>/composer.lock`.
pub fn laravel_version(dir: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(dir.join("composer.lock")).ok()?;
    let lock: ComposerLock = serde_json::from_str(&raw).ok()?;

    lock.packages
        .into_iter()
        .find(|package| package.name == FRAMEWORK_PACKAGE)
        .and_then(|package| package.version)
}
