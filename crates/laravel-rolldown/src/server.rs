//! Dev Server Hook.
//!
//! Given a handle to the host's development server, waits for its
//! transport to begin listening, persists the reachable URL to the
//! hot-reload marker, emits a startup banner, and wires marker removal
//! into the process lifecycle (normal exit via drop guard, termination
//! signals via the [`LifecycleManager`]).
//!
//! The hook never talks to the Config Provider; the host invokes the two
//! independently.

use crate::env::{Env, EnvSource};
use crate::error::Result;
use crate::hot::{HotFile, HotFileGuard};
use crate::lifecycle::LifecycleManager;
use crate::version::laravel_version;
use async_trait::async_trait;
use owo_colors::OwoColorize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Transport scheme of the dev server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// `Https` when the transport is TLS-wrapped, else `Http`.
    pub fn from_tls(tls: bool) -> Self {
        if tls {
            Self::Https
        } else {
            Self::Http
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => f.write_str("http"),
            Self::Https => f.write_str("https"),
        }
    }
}

/// Bound address of a listening dev server.
///
/// Displays as the full URL the marker file carries:
/// `<scheme>://<address>:<port>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerAddr {
    pub scheme: Scheme,
    pub addr: SocketAddr,
}

impl std::fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.addr)
    }
}

/// Narrow adapter over the host's dev server transport.
///
/// `listening` resolves once the underlying transport is bound, the
/// moral equivalent of a one-shot "now listening" event. It resolves at
/// most once per hook attachment.
#[async_trait]
pub trait DevServerHandle: Send + Sync {
    async fn listening(&self) -> std::io::Result<ServerAddr>;
}

/// A server that is already bound when the hook attaches.
///
/// Hosts that bind their listener before handing control to the hook can
/// use this instead of implementing [`DevServerHandle`] themselves.
#[derive(Debug, Clone, Copy)]
pub struct BoundServer(pub ServerAddr);

#[async_trait]
impl DevServerHandle for BoundServer {
    async fn listening(&self) -> std::io::Result<ServerAddr> {
        Ok(self.0)
    }
}

/// The dev-server lifecycle hook.
///
/// Created by [`crate::hot_server`] or [`crate::LaravelPlugin::hot_server`].
#[derive(Debug)]
pub struct HotServerHook {
    hot_file: HotFile,
    cwd: PathBuf,
    lifecycle: Arc<LifecycleManager>,
}

impl Default for HotServerHook {
    fn default() -> Self {
        Self::new()
    }
}

impl HotServerHook {
    pub fn new() -> Self {
        Self {
            hot_file: HotFile::default(),
            cwd: PathBuf::from("."),
            lifecycle: LifecycleManager::shared(),
        }
    }

    /// Override the marker path (default `public/hot`).
    pub fn with_hot_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.hot_file = HotFile::new(path);
        self
    }

    /// Override the working directory used for env loading and version
    /// detection (default `.`).
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Share an externally owned lifecycle manager.
    pub fn with_lifecycle(mut self, lifecycle: Arc<LifecycleManager>) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    /// The lifecycle manager this hook registers its cleanup with. Hosts
    /// await [`LifecycleManager::listen`] on it to drive signal shutdown.
    pub fn lifecycle(&self) -> Arc<LifecycleManager> {
        self.lifecycle.clone()
    }

    /// Path of the marker this hook manages.
    pub fn hot_file_path(&self) -> &Path {
        self.hot_file.path()
    }

    /// Attach to a dev server: wait for listening, write the marker,
    /// schedule the banner, and return the normal-exit guard.
    ///
    /// Marker removal is registered with the lifecycle manager before the
    /// listening state is awaited, so termination cleanup runs (as a
    /// no-op) even when the transport never comes up.
    ///
    /// # Errors
    ///
    /// Fails when the server cannot report a bound address or the marker
    /// cannot be written. Both are fatal to dev-server startup.
    pub async fn attach(&self, server: &dyn DevServerHandle) -> Result<HotFileGuard> {
        let hot = self.hot_file.clone();
        self.lifecycle.register_cleanup(move || {
            let _ = hot.remove();
        });

        let addr = server.listening().await?;
        self.hot_file.write(&addr)?;
        info!("hot file written: {}", addr);

        // Deferred: after the marker write completes, not before. Purely
        // observability; not part of the correctness contract.
        let cwd = self.cwd.clone();
        tokio::spawn(async move {
            banner(&cwd);
        });

        Ok(HotFileGuard::new(self.hot_file.clone()))
    }
}

/// Startup banner: framework name and detected version, then `APP_URL`.
///
/// Every input is best-effort; missing lockfile or unset variable degrade
/// to empty strings and nothing here can fail the caller.
fn banner(cwd: &Path) {
    let version = laravel_version(cwd).unwrap_or_default();
    let app_url = Env::load(cwd, "")
        .lookup("APP_URL")
        .unwrap_or_default();

    info!("{}", format!("\n  Laravel {version} ").red());
    info!("\n  > APP_URL: {}", app_url.cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_display() {
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Https.to_string(), "https");
    }

    #[test]
    fn test_scheme_from_tls() {
        assert_eq!(Scheme::from_tls(true), Scheme::Https);
        assert_eq!(Scheme::from_tls(false), Scheme::Http);
    }

    #[test]
    fn test_server_addr_display() {
        let addr = ServerAddr {
            scheme: Scheme::Http,
            addr: "127.0.0.1:5173".parse().unwrap(),
        };
        assert_eq!(addr.to_string(), "http://127.0.0.1:5173");

        let tls = ServerAddr {
            scheme: Scheme::Https,
            addr: "0.0.0.0:443".parse().unwrap(),
        };
        assert_eq!(tls.to_string(), "https://0.0.0.0:443");
    }

    #[tokio::test]
    async fn test_bound_server_resolves_immediately() {
        let addr = ServerAddr {
            scheme: Scheme::Http,
            addr: "127.0.0.1:5173".parse().unwrap(),
        };
        let server = BoundServer(addr);
        assert_eq!(server.listening().await.unwrap(), addr);
    }

    #[test]
    fn test_banner_survives_missing_inputs() {
        // No composer.lock, no .env, no APP_URL: must not panic.
        let dir = tempfile::TempDir::new().unwrap();
        banner(dir.path());
    }
}
