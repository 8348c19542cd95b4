//! Process bootstrap: database pool, module registry and HTTP server.

use anyhow::Context;
use bookstore_db::Database;
use bookstore_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules;

/// Run the service until a shutdown signal arrives.
///
/// The pool is opened once here and closed before returning, whether the
/// server ran to completion or failed during startup.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let database = Database::connect(&settings.database)
        .await
        .context("failed to connect to database")?;

    let result = serve(&settings, &database).await;
    database.close().await;
    result
}

async fn serve(settings: &Settings, database: &Database) -> anyhow::Result<()> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, database.pool().clone());

    let ctx = InitCtx { settings };
    registry.init_all(&ctx).await?;

    let served = bookstore_http::start_server(&registry, settings, shutdown_signal()).await;
    let stopped = registry.stop_all().await;

    served.and(stopped)
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
