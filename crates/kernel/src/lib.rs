//! Kernel for the bookstore service: layered settings, the `Module` contract,
//! and the registry that drives module lifecycle.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
