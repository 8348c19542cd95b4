pub mod books;

use std::sync::Arc;

use bookstore_kernel::ModuleRegistry;
use sqlx::PgPool;

/// Register every module over the Postgres pool.
///
/// Handlers reach the adapter through the repository decorator.
pub fn register_all(registry: &mut ModuleRegistry, pool: PgPool) {
    let store: books::SharedBookStore = Arc::new(books::BookRepository::new(
        books::PostgresBookStore::new(pool),
    ));
    register_with_store(registry, store);
}

/// Register every module over an explicit book store
pub fn register_with_store(registry: &mut ModuleRegistry, store: books::SharedBookStore) {
    registry.register(books::create_module(store));
}
