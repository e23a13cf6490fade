//! Environment variable loading.
//!
//! The plugin reads exactly two variables (`ASSET_URL`, `APP_URL`), but the
//! loader itself is a generic key-value lookup so the core logic never
//! depends on a particular environment mechanism. Hosts that manage their
//! own environment can inject any [`EnvSource`].
//!
//! [`Env::load`] follows the dotenv layering convention Laravel tooling
//! expects: later files win, and the process environment wins over all
//! files.

use std::collections::HashMap;
use std::path::Path;

/// Injected key-value lookup collaborator.
pub trait EnvSource {
    /// Look up a variable by name. Absence is a normal outcome.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Mode-scoped environment loaded from dotenv files and the process.
///
/// Files are read from the given directory in increasing precedence:
///
/// 1. `.env`
/// 2. `.env.local`
/// 3. `.env.<mode>` (skipped when `mode` is empty)
/// 4. `.env.<mode>.local`
///
/// then process environment variables override everything. Missing files
/// are normal; malformed lines are skipped.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Load the environment for `mode` relative to `dir`.
    pub fn load(dir: &Path, mode: &str) -> Self {
        let mut vars = HashMap::new();

        let mut files = vec![".env".to_string(), ".env.local".to_string()];
        if !mode.is_empty() {
            files.push(format!(".env.{mode}"));
            files.push(format!(".env.{mode}.local"));
        }

        for file in files {
            if let Ok(contents) = std::fs::read_to_string(dir.join(&file)) {
                parse_into(&contents, &mut vars);
            }
        }

        // Process environment has the last word.
        for (key, value) in std::env::vars() {
            vars.insert(key, value);
        }

        Self { vars }
    }

    /// Build an environment from explicit pairs. Used by tests and hosts
    /// that resolve their environment elsewhere.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for Env {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Process environment only, no dotenv files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Parse dotenv lines into `vars`, overwriting existing keys.
///
/// Accepted line shape: `KEY=VALUE` with an optional `export ` prefix,
/// `#` comment lines, and optional matching single or double quotes around
/// the value. Anything else is skipped.
fn parse_into(contents: &str, vars: &mut HashMap<String, String>) {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() || !is_valid_key(key) {
            continue;
        }

        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }
}

fn is_valid_key(key: &str) -> bool {
    key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strip one pair of matching surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
