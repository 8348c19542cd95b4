use axum::{routing::get, Router};

use super::controller::{self, SharedBookStore};

/// Route table for the books API.
///
/// `/books` without the trailing slash is accepted for list and create.
pub fn router(store: SharedBookStore) -> Router {
    Router::new()
        .route(
            "/books/",
            get(controller::get_all_books).post(controller::create_book),
        )
        .route(
            "/books",
            get(controller::get_all_books).post(controller::create_book),
        )
        .route(
            "/books/{id}",
            get(controller::get_book_by_id)
                .put(controller::update_book_by_id)
                .delete(controller::delete_book_by_id),
        )
        .with_state(store)
}
