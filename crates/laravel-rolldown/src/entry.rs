//! Entrypoint set handling.
//!
//! Laravel projects hand the bundler a list of relative asset paths
//! (`resources/js/app.js`, `resources/css/app.css`, ...). Blade templates
//! sometimes reference them with a leading slash, so normalization strips
//! every leading `/` from every entry. Order and count are preserved.

use rolldown_common::InputItem;
use serde::{Deserialize, Serialize};

/// Ordered set of bundler entrypoints, normalized to relative paths.
///
/// Construct via the `From` conversions, which accept a single path or a
/// sequence of paths:
///
/// ```rust
/// use laravel_rolldown::Entrypoints;
///
/// let single = Entrypoints::from("resources/js/app.js");
/// let many = Entrypoints::from(vec!["/a.js".to_string(), "//b.css".to_string()]);
/// assert_eq!(many.as_slice(), ["a.js", "b.css"]);
/// ```
///
/// No validation is performed beyond normalization; an empty set is passed
/// through as-is and rejected (or not) by the host bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entrypoints(Vec<String>);

impl Entrypoints {
    /// Build a normalized set from any iterator of path-like strings.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            paths
                .into_iter()
                .map(|p| normalize(&p.into()))
                .collect(),
        )
    }

    /// Normalized entries, in input order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to Rolldown input records.
    ///
    /// Entries are unnamed; Rolldown derives chunk names from the file
    /// stems, which matches how the manifest keys assets.
    pub fn to_input_items(&self) -> Vec<InputItem> {
        self.0
            .iter()
            .map(|entry| InputItem {
                name: None,
                import: entry.clone(),
            })
            .collect()
    }
}

/// Strip every leading `/` from an entrypoint path.
fn normalize(path: &str) -> String {
    path.trim_start_matches('/').to_string()
}

impl From<&str> for Entrypoints {
    fn from(path: &str) -> Self {
        Self::new([path])
    }
}

impl From<String> for Entrypoints {
    fn from(path: String) -> Self {
        Self::new([path])
    }
}

impl From<Vec<String>> for Entrypoints {
    fn from(paths: Vec<String>) -> Self {
        Self::new(paths)
    }
}

impl From<Vec<&str>> for Entrypoints {
    fn from(paths: Vec<&str>) -> Self {
        Self::new(paths)
    }
}

impl<const N: usize> From<[&str; N]> for Entrypoints {
    fn from(paths: [&str; N]) -> Self {
        Self::new(paths)
    }
}

impl From<&[&str]> for Entrypoints {
    fn from(paths: &[&str]) -> Self {
        Self::new(paths.iter().copied())
    }
}

impl FromIterator<String> for Entrypoints {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Entrypoints {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
