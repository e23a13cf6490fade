//! Laravel integration plugin for Rolldown.
//!
//! Two cooperating, independently invoked units:
//!
//! - **Config Provider** ([`LaravelPlugin::config_fragment`]): turns a list
//!   of asset entrypoints plus the host's command/mode into a
//!   [`ConfigFragment`] the host merges into its bundler configuration
//!   (entry inputs, asset base URL, `public/build` output directory,
//!   manifest flag, disabled static passthrough).
//! - **Dev Server Hook** ([`HotServerHook`]): once the dev server's
//!   transport is listening, writes its URL to the `public/hot` marker,
//!   logs a startup banner, and removes the marker on normal exit or
//!   termination signal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use laravel_rolldown::{laravel, BuildCommand};
//!
//! let plugin = laravel("resources/js/app.js");
//! let fragment = plugin.config_fragment(BuildCommand::Build, "production");
//! assert!(fragment.base.ends_with("/build/"));
//! ```

use rolldown_plugin::{HookUsage, Plugin};
use std::borrow::Cow;
use std::path::PathBuf;

mod config;
mod entry;
mod env;
mod error;
mod hot;
mod lifecycle;
mod server;
mod version;

pub use config::{BuildCommand, BuildFragment, ConfigFragment, PluginConfig};
pub use entry::Entrypoints;
pub use env::{Env, EnvSource, ProcessEnv};
pub use error::{BridgeError, Result};
pub use hot::{HotFile, HotFileGuard};
pub use lifecycle::{shutdown_signal, LifecycleManager};
pub use server::{BoundServer, DevServerHandle, HotServerHook, Scheme, ServerAddr};
pub use version::laravel_version;

/// The Laravel plugin: entrypoints plus plugin configuration.
///
/// Holds no connection to the dev server; the host asks for config
/// fragments during configuration resolution and, in dev mode, obtains a
/// [`HotServerHook`] via [`LaravelPlugin::hot_server`] once its server
/// exists.
#[derive(Debug, Clone)]
pub struct LaravelPlugin {
    entrypoints: Entrypoints,
    config: PluginConfig,
    cwd: PathBuf,
}

impl LaravelPlugin {
    /// Create the plugin for the given entrypoints (a single path or a
    /// sequence; leading slashes are stripped).
    pub fn new(entrypoints: impl Into<Entrypoints>) -> Self {
        Self {
            entrypoints: entrypoints.into(),
            config: PluginConfig::default(),
            cwd: PathBuf::from("."),
        }
    }

    /// Replace the default directory layout.
    pub fn with_config(mut self, config: PluginConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the working directory used for env loading (default `.`).
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// The normalized entrypoint set.
    pub fn entrypoints(&self) -> &Entrypoints {
        &self.entrypoints
    }

    pub fn plugin_config(&self) -> &PluginConfig {
        &self.config
    }

    /// Produce the configuration fragment for `command` and `mode`,
    /// loading `ASSET_URL` from the mode-scoped environment of the working
    /// directory.
    ///
    /// Recomputed fresh on every call; hosts may re-invoke across
    /// environment or mode changes.
    pub fn config_fragment(&self, command: BuildCommand, mode: &str) -> ConfigFragment {
        let env = Env::load(&self.cwd, mode);
        self.config_fragment_with_env(command, &env)
    }

    /// Like [`Self::config_fragment`] but with an injected environment.
    pub fn config_fragment_with_env(
        &self,
        command: BuildCommand,
        env: &dyn EnvSource,
    ) -> ConfigFragment {
        ConfigFragment::produce(&self.entrypoints, command, env, &self.config)
    }

    /// A dev-server hook wired to this plugin's hot-file path and working
    /// directory.
    pub fn hot_server(&self) -> HotServerHook {
        HotServerHook::new()
            .with_hot_file(self.config.hot_file_path())
            .with_cwd(self.cwd.clone())
    }
}

impl Plugin for LaravelPlugin {
    fn name(&self) -> Cow<'static, str> {
        "laravel".into()
    }

    // The integration contributes configuration and server lifecycle, not
    // content hooks.
    fn register_hook_usage(&self) -> HookUsage {
        HookUsage::empty()
    }
}

impl Plugin for HotServerHook {
    fn name(&self) -> Cow<'static, str> {
        "laravel:hot-server".into()
    }

    fn register_hook_usage(&self) -> HookUsage {
        HookUsage::empty()
    }
}

/// Primary entry point: the Laravel plugin for the given entrypoints.
///
/// ```rust
/// use laravel_rolldown::laravel;
///
/// let plugin = laravel(vec!["/resources/js/app.js", "resources/css/app.css"]);
/// assert_eq!(plugin.entrypoints().len(), 2);
/// ```
pub fn laravel(entrypoints: impl Into<Entrypoints>) -> LaravelPlugin {
    LaravelPlugin::new(entrypoints)
}

/// Secondary entry point: only the dev-server hook, for hosts that manage
/// their bundler configuration elsewhere.
pub fn hot_server() -> HotServerHook {
    HotServerHook::new()
}
