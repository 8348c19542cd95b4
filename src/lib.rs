//! Bookstore application library
//!
//! Feature modules and the bootstrap sequence that wires settings, telemetry,
//! the database pool and the HTTP server together.

pub mod app;
pub mod modules;

pub use modules::*;
