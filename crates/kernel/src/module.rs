use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Contract every feature module of the service implements
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Called once during startup, before the HTTP server binds
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Axum router carrying this module's routes.
    /// Paths are absolute; the router is merged into the application as-is.
    fn routes(&self) -> Router {
        Router::new()
    }

    /// OpenAPI fragment (`paths` and `components.schemas`) merged into the
    /// service document
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Called during graceful shutdown, after the server stopped accepting requests
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
