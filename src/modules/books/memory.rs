//! In-process [`BookStore`] used by tests and local experiments.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::{self, BookRequest, BookResponse, BookUpdateRequest};
use super::store::{parse_book_id, BookStore, BookStoreError};

#[derive(Debug, Default)]
struct Shelf {
    next_id: i64,
    books: BTreeMap<i64, BookResponse>,
}

/// Books kept in a map ordered by id; ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    shelf: RwLock<Shelf>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.shelf.read().await.books.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn create_book(&self, request: BookRequest) -> Result<BookResponse, BookStoreError> {
        let now = models::now();
        let mut shelf = self.shelf.write().await;
        shelf.next_id += 1;

        let book = BookResponse {
            id: shelf.next_id,
            name: request.name,
            author: request.author,
            publication: request.publication,
            created_at: now,
            updated_at: now,
        };
        shelf.books.insert(book.id, book.clone());

        Ok(book)
    }

    async fn get_all_books(&self) -> Result<Vec<BookResponse>, BookStoreError> {
        Ok(self.shelf.read().await.books.values().cloned().collect())
    }

    async fn get_book_by_id(&self, id: &str) -> Result<BookResponse, BookStoreError> {
        let book_id = parse_book_id(id)?;
        self.shelf
            .read()
            .await
            .books
            .get(&book_id)
            .cloned()
            .ok_or(BookStoreError::NotFound)
    }

    async fn update_book_by_id(
        &self,
        id: &str,
        request: BookUpdateRequest,
    ) -> Result<BookResponse, BookStoreError> {
        let book_id = parse_book_id(id)?;
        let mut shelf = self.shelf.write().await;

        let book = shelf
            .books
            .get_mut(&book_id)
            .ok_or_else(|| BookStoreError::Backend(format!("no book with id {book_id} to update")))?;

        book.name = request.name;
        book.author = request.author;
        book.publication = request.publication;
        book.updated_at = models::now().max(book.updated_at);

        Ok(book.clone())
    }

    async fn delete_book_by_id(&self, id: &str) -> Result<(), BookStoreError> {
        let book_id = parse_book_id(id)?;
        self.shelf.write().await.books.remove(&book_id);
        Ok(())
    }
}
