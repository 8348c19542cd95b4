use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("invalid database configuration: {0}")]
    ConnectionConfig(String),

    #[error("failed to connect to the database: {0}")]
    Connection(#[from] sqlx::Error),
}
