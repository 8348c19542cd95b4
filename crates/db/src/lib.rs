//! Postgres access for the bookstore service.
//!
//! Owns the connection pool: built once at startup from [`DatabaseSettings`],
//! shared by every adapter through [`Database::pool`], and released with
//! [`Database::close`] during shutdown.
//!
//! [`DatabaseSettings`]: bookstore_kernel::settings::DatabaseSettings

pub mod connection;
pub mod error;

pub use connection::Database;
pub use error::DbError;
