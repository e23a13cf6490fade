//! Development server command.
//!
//! Binds an HTTP listener, serves the Laravel public directory, attaches
//! the hot-server hook (which writes `public/hot` and schedules the
//! startup banner), then waits on the lifecycle manager for a termination
//! signal. On shutdown the hot file is removed before the process exits.

use crate::cli::DevArgs;
use crate::error::{CliError, Result};
use crate::ui;
use axum::Router;
use laravel_rolldown::{laravel, BoundServer, Scheme, ServerAddr};
use tower_http::services::ServeDir;

pub async fn execute(args: DevArgs) -> Result<()> {
    let plugin = laravel(args.entry).with_cwd(&args.cwd);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: bind_addr,
            source,
        })?;
    let local = listener.local_addr()?;

    // The marker path is anchored to the project directory, not the
    // directory this binary happens to run from.
    let hook = laravel_rolldown::hot_server()
        .with_hot_file(args.cwd.join(plugin.plugin_config().hot_file_path()))
        .with_cwd(&args.cwd);
    let lifecycle = hook.lifecycle();
    let server_addr = ServerAddr {
        scheme: Scheme::Http,
        addr: local,
    };
    let _guard = hook.attach(&BoundServer(server_addr)).await?;

    ui::success(&format!("Dev server running at {server_addr}"));
    ui::info("Press Ctrl+C to stop");

    let public_dir = args.cwd.join(&args.public_dir);
    tracing::debug!("serving static files from {}", public_dir.display());
    let app = Router::new().fallback_service(ServeDir::new(public_dir));

    let mut serve_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            ui::error(&format!("Server error: {e}"));
        }
    });

    tokio::select! {
        // Runs cleanups (hot-file removal) and forces process exit on
        // SIGINT/SIGHUP/SIGTERM. Never resolves otherwise.
        _ = lifecycle.listen() => {}

        _ = &mut serve_handle => {
            ui::warning("Server task completed unexpectedly");
        }
    }

    // Reached only when the server task died; the guard drop removes the
    // hot file on this normal-exit path.
    Ok(())
}
