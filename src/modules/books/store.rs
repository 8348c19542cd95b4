//! Persistence contract for book records.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::models::{BookRequest, BookResponse, BookUpdateRequest};

#[derive(Error, Debug)]
pub enum BookStoreError {
    /// Only raised by [`BookStore::get_book_by_id`].
    #[error("book not found")]
    NotFound,

    #[error("invalid book id '{0}'")]
    InvalidId(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Failure reported by a store that is not backed by SQL
    #[error("{0}")]
    Backend(String),
}

impl BookStoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookStoreError::NotFound)
    }
}

/// Storage-independent set of book operations.
///
/// Identifiers travel as strings; each implementation converts them to its
/// native key type.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new book. Both timestamps are set to the same instant.
    async fn create_book(&self, request: BookRequest) -> Result<BookResponse, BookStoreError>;

    /// Every stored book, in the store's natural order. Empty when there are none.
    async fn get_all_books(&self) -> Result<Vec<BookResponse>, BookStoreError>;

    /// The book with `id`, or [`BookStoreError::NotFound`].
    async fn get_book_by_id(&self, id: &str) -> Result<BookResponse, BookStoreError>;

    /// Overwrite name, author and publication and stamp `updated_at` with the
    /// current instant. A missing id is a storage error, not `NotFound`.
    async fn update_book_by_id(
        &self,
        id: &str,
        request: BookUpdateRequest,
    ) -> Result<BookResponse, BookStoreError>;

    /// Remove the book with `id`. Succeeds when nothing matched.
    async fn delete_book_by_id(&self, id: &str) -> Result<(), BookStoreError>;
}

#[async_trait]
impl<T: BookStore + ?Sized> BookStore for Arc<T> {
    async fn create_book(&self, request: BookRequest) -> Result<BookResponse, BookStoreError> {
        (**self).create_book(request).await
    }

    async fn get_all_books(&self) -> Result<Vec<BookResponse>, BookStoreError> {
        (**self).get_all_books().await
    }

    async fn get_book_by_id(&self, id: &str) -> Result<BookResponse, BookStoreError> {
        (**self).get_book_by_id(id).await
    }

    async fn update_book_by_id(
        &self,
        id: &str,
        request: BookUpdateRequest,
    ) -> Result<BookResponse, BookStoreError> {
        (**self).update_book_by_id(id, request).await
    }

    async fn delete_book_by_id(&self, id: &str) -> Result<(), BookStoreError> {
        (**self).delete_book_by_id(id).await
    }
}

/// Parse a path identifier into the numeric key used by the stores.
pub fn parse_book_id(id: &str) -> Result<i64, BookStoreError> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| BookStoreError::InvalidId(id.to_string()))
}
