//! Pass-through [`BookStore`] decorator.
//!
//! Every method forwards to the wrapped store and returns its result as-is.
//! Cross-cutting behaviour (caching, metrics, retries) belongs here rather than
//! in the handlers or the adapters.

use async_trait::async_trait;

use super::models::{BookRequest, BookResponse, BookUpdateRequest};
use super::store::{BookStore, BookStoreError};

#[derive(Debug, Clone)]
pub struct BookRepository<S> {
    inner: S,
}

impl<S: BookStore> BookRepository<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: BookStore> BookStore for BookRepository<S> {
    async fn create_book(&self, request: BookRequest) -> Result<BookResponse, BookStoreError> {
        self.inner.create_book(request).await
    }

    async fn get_all_books(&self) -> Result<Vec<BookResponse>, BookStoreError> {
        self.inner.get_all_books().await
    }

    async fn get_book_by_id(&self, id: &str) -> Result<BookResponse, BookStoreError> {
        self.inner.get_book_by_id(id).await
    }

    async fn update_book_by_id(
        &self,
        id: &str,
        request: BookUpdateRequest,
    ) -> Result<BookResponse, BookStoreError> {
        self.inner.update_book_by_id(id, request).await
    }

    async fn delete_book_by_id(&self, id: &str) -> Result<(), BookStoreError> {
        self.inner.delete_book_by_id(id).await
    }
}
