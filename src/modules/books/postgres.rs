//! [`BookStore`] backed by the `books` table in Postgres.

use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{self, Book, BookRequest, BookResponse, BookUpdateRequest};
use super::store::{parse_book_id, BookStore, BookStoreError};

const INSERT_BOOK: &str = "INSERT INTO books (name, author, publication, created_at, updated_at) \
     VALUES ($1, $2, $3, $4, $4) \
     RETURNING id, name, author, publication, created_at, updated_at";

const SELECT_BOOKS: &str = "SELECT id, name, author, publication, created_at, updated_at FROM books";

const SELECT_BOOK_BY_ID: &str =
    "SELECT id, name, author, publication, created_at, updated_at FROM books WHERE id = $1";

const UPDATE_BOOK_BY_ID: &str =
    "UPDATE books SET name = $1, author = $2, publication = $3, updated_at = $4 \
     WHERE id = $5 \
     RETURNING id, name, author, publication, created_at, updated_at";

const DELETE_BOOK_BY_ID: &str = "DELETE FROM books WHERE id = $1";

#[derive(Debug, Clone)]
pub struct PostgresBookStore {
    pool: PgPool,
}

impl PostgresBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PostgresBookStore {
    async fn create_book(&self, request: BookRequest) -> Result<BookResponse, BookStoreError> {
        let now = models::now();

        let book = sqlx::query_as::<_, Book>(INSERT_BOOK)
            .bind(&request.name)
            .bind(&request.author)
            .bind(&request.publication)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(book_id = book.id, "book inserted");
        Ok(book.into())
    }

    async fn get_all_books(&self) -> Result<Vec<BookResponse>, BookStoreError> {
        let books = sqlx::query_as::<_, Book>(SELECT_BOOKS)
            .fetch_all(&self.pool)
            .await?;

        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    async fn get_book_by_id(&self, id: &str) -> Result<BookResponse, BookStoreError> {
        let book_id = parse_book_id(id)?;

        sqlx::query_as::<_, Book>(SELECT_BOOK_BY_ID)
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?
            .map(BookResponse::from)
            .ok_or(BookStoreError::NotFound)
    }

    async fn update_book_by_id(
        &self,
        id: &str,
        request: BookUpdateRequest,
    ) -> Result<BookResponse, BookStoreError> {
        let book_id = parse_book_id(id)?;
        let now = models::now();

        // A missing row surfaces as `sqlx::Error::RowNotFound`, i.e. a storage error.
        let book = sqlx::query_as::<_, Book>(UPDATE_BOOK_BY_ID)
            .bind(&request.name)
            .bind(&request.author)
            .bind(&request.publication)
            .bind(now)
            .bind(book_id)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(book_id, "book updated");
        Ok(book.into())
    }

    async fn delete_book_by_id(&self, id: &str) -> Result<(), BookStoreError> {
        let book_id = parse_book_id(id)?;

        let result = sqlx::query(DELETE_BOOK_BY_ID)
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(book_id, rows = result.rows_affected(), "book delete executed");
        Ok(())
    }
}
