//! Config Provider: turns entrypoints plus command/mode into a bundler
//! configuration fragment.
//!
//! The fragment is a pure function of its inputs and the environment. It is
//! computed fresh on every configuration-resolution pass and never mutated
//! after being returned; the host merges it into its own options and may
//! re-invoke across mode changes.

use crate::entry::Entrypoints;
use crate::env::EnvSource;
use rolldown_common::BundlerOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the host build tool was asked to do.
///
/// `Build` produces optimized static output; `Serve` runs the live dev
/// server. The asset base URL only applies to `Build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildCommand {
    Build,
    Serve,
}

impl BuildCommand {
    pub fn is_build(self) -> bool {
        matches!(self, Self::Build)
    }
}

/// Plugin configuration knobs.
///
/// Defaults reproduce the conventional Laravel layout: assets compile into
/// `public/build` and the dev server announces itself through `public/hot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Directory Laravel serves as its web root.
    pub public_directory: PathBuf,

    /// Subdirectory of the public directory that receives built assets.
    /// Also the path segment appended to `ASSET_URL` in build mode.
    pub build_directory: String,

    /// Hot-reload marker path. Defaults to `<public_directory>/hot`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_file: Option<PathBuf>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            public_directory: PathBuf::from("public"),
            build_directory: "build".to_string(),
            hot_file: None,
        }
    }
}

impl PluginConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the public directory.
    pub fn with_public_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_directory = dir.into();
        self
    }

    /// Override the build subdirectory. Leading and trailing slashes are
    /// stripped so the URL join stays well-formed.
    pub fn with_build_directory(mut self, dir: impl Into<String>) -> Self {
        self.build_directory = dir.into().trim_matches('/').to_string();
        self
    }

    /// Override the hot-reload marker path.
    pub fn with_hot_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.hot_file = Some(path.into());
        self
    }

    /// Resolved marker path.
    pub fn hot_file_path(&self) -> PathBuf {
        self.hot_file
            .clone()
            .unwrap_or_else(|| self.public_directory.join("hot"))
    }

    /// Resolved output directory (`public/build` by default).
    pub fn out_dir(&self) -> PathBuf {
        self.public_directory.join(&self.build_directory)
    }
}

/// Nested build options of a [`ConfigFragment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildFragment {
    /// Ask the host bundler to emit a manifest mapping logical asset names
    /// to hashed output paths.
    pub manifest: bool,

    /// Output directory for compiled assets.
    pub out_dir: PathBuf,

    /// Bundler entry inputs.
    pub input: Entrypoints,
}

/// Configuration fragment merged by the host into its overall build
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFragment {
    /// Public base URL for built assets. Empty outside of build mode.
    pub base: String,

    /// `None` disables the host's default static-asset passthrough; the
    /// framework serves its own public directory.
    pub public_dir: Option<PathBuf>,

    pub build: BuildFragment,
}

impl ConfigFragment {
    /// Produce the fragment for the given entrypoints, command and mode.
    ///
    /// Reads only `ASSET_URL` from `env`. No validation of the entrypoints
    /// happens here; the host bundler rejects invalid input itself.
    pub fn produce(
        entrypoints: &Entrypoints,
        command: BuildCommand,
        env: &dyn EnvSource,
        config: &PluginConfig,
    ) -> Self {
        let base = if command.is_build() {
            let asset_url = env.lookup("ASSET_URL").unwrap_or_default();
            asset_base(&asset_url, &config.build_directory)
        } else {
            String::new()
        };

        Self {
            base,
            public_dir: None,
            build: BuildFragment {
                manifest: true,
                out_dir: config.out_dir(),
                input: entrypoints.clone(),
            },
        }
    }

    /// Copy the entry inputs and working directory into Rolldown options.
    ///
    /// The output directory and manifest flag stay on the fragment: the
    /// host writes bundle output with an explicit directory argument, the
    /// same way it consumes the rest of the fragment.
    pub fn apply_to(&self, options: &mut BundlerOptions, cwd: &Path) {
        options.input = Some(self.build.input.to_input_items());
        options.cwd = Some(cwd.to_path_buf());
    }
}

/// Join `ASSET_URL` and the build directory with exactly one `/`.
///
/// The result always ends with `/<build_directory>/`, so an empty
/// `ASSET_URL` yields `/build/`.
fn asset_base(asset_url: &str, build_directory: &str) -> String {
    let separator = if asset_url.ends_with('/') { "" } else { "/" };
    format!("{asset_url}{separator}{build_directory}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;

    fn env(pairs: &[(&str, &str)]) -> Env {
        Env::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_base_with_empty_asset_url() {
        assert_eq!(asset_base("", "build"), "/build/");
    }

    #[test]
    fn test_base_without_trailing_slash() {
        assert_eq!(asset_base("https://cdn.test", "build"), "https://cdn.test/build/");
    }

    #[test]
    fn test_base_with_trailing_slash() {
        assert_eq!(asset_base("https://cdn.test/", "build"), "https://cdn.test/build/");
    }

    #[test]
    fn test_base_custom_build_directory() {
        assert_eq!(asset_base("", "assets"), "/assets/");
    }

    #[test]
    fn test_build_mode_reads_asset_url() {
        let entries = Entrypoints::from("resources/js/app.js");
        let fragment = ConfigFragment::produce(
            &entries,
            BuildCommand::Build,
            &env(&[("ASSET_URL", "https://cdn.test")]),
            &PluginConfig::default(),
        );
        assert_eq!(fragment.base, "https://cdn.test/build/");
    }

    #[test]
    fn test_serve_mode_base_is_empty() {
        let entries = Entrypoints::from("resources/js/app.js");
        let fragment = ConfigFragment::produce(
            &entries,
            BuildCommand::Serve,
            &env(&[("ASSET_URL", "https://cdn.test")]),
            &PluginConfig::default(),
        );
        assert_eq!(fragment.base, "");
    }

    #[test]
    fn test_fragment_scenario_a() {
        // Build mode, no ASSET_URL: base /build/, out dir public/build,
        // manifest enabled, single normalized entry.
        let entries = Entrypoints::from("resources/js/app.js");
        let fragment = ConfigFragment::produce(
            &entries,
            BuildCommand::Build,
            &env(&[]),
            &PluginConfig::default(),
        );

        assert_eq!(fragment.base, "/build/");
        assert!(fragment.public_dir.is_none());
        assert!(fragment.build.manifest);
        assert_eq!(fragment.build.out_dir, PathBuf::from("public/build"));
        assert_eq!(fragment.build.input.as_slice(), ["resources/js/app.js"]);
    }

    #[test]
    fn test_fragment_is_recomputed_not_cached() {
        let entries = Entrypoints::from("resources/js/app.js");
        let config = PluginConfig::default();

        let with_cdn = ConfigFragment::produce(
            &entries,
            BuildCommand::Build,
            &env(&[("ASSET_URL", "https://cdn.test")]),
            &config,
        );
        let without = ConfigFragment::produce(&entries, BuildCommand::Build, &env(&[]), &config);

        assert_eq!(with_cdn.base, "https://cdn.test/build/");
        assert_eq!(without.base, "/build/");
    }

    #[test]
    fn test_apply_to_sets_inputs_and_cwd() {
        let entries = Entrypoints::from(vec!["/a.js", "b.css"]);
        let fragment = ConfigFragment::produce(
            &entries,
            BuildCommand::Serve,
            &env(&[]),
            &PluginConfig::default(),
        );

        let mut options = BundlerOptions::default();
        fragment.apply_to(&mut options, Path::new("/srv/app"));

        let inputs = options.input.expect("inputs set");
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].import, "a.js");
        assert_eq!(options.cwd, Some(PathBuf::from("/srv/app")));
    }

    #[test]
    fn test_plugin_config_builder() {
        let config = PluginConfig::new()
            .with_public_directory("www")
            .with_build_directory("/bundle/")
            .with_hot_file("storage/hot");

        assert_eq!(config.out_dir(), PathBuf::from("www/bundle"));
        assert_eq!(config.hot_file_path(), PathBuf::from("storage/hot"));
        assert_eq!(config.build_directory, "bundle");
    }

    #[test]
    fn test_default_hot_file_follows_public_directory() {
        let config = PluginConfig::new().with_public_directory("www");
        assert_eq!(config.hot_file_path(), PathBuf::from("www/hot"));
    }
}
