use std::str::FromStr;

use bookstore_kernel::settings::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPool};

use crate::error::DbError;

/// Process-wide handle on the Postgres connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Parses the configured URL and opens the pool with driver defaults.
    ///
    /// At least one connection is established before returning, so an
    /// unreachable database fails startup instead of the first request.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DbError> {
        let options = connect_options(&settings.url)?;

        tracing::info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or_default(),
            "connecting to postgres"
        );

        let pool = PgPool::connect_with(options).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes every connection; waits for checked-out connections to return.
    pub async fn close(self) {
        tracing::info!("closing postgres connection pool");
        self.pool.close().await;
    }
}

fn connect_options(url: &str) -> Result<PgConnectOptions, DbError> {
    if url.trim().is_empty() {
        return Err(DbError::ConnectionConfig(
            "database url must be set".to_string(),
        ));
    }

    PgConnectOptions::from_str(url).map_err(|e| DbError::ConnectionConfig(e.to_string()))
}
