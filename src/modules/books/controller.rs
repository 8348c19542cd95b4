//! HTTP handlers translating requests into [`BookStore`] calls.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use bookstore_http::AppError;
use serde::Serialize;

use super::models::{BookRequest, BookResponse, BookUpdateRequest};
use super::store::{BookStore, BookStoreError};

/// Store shared by every handler
pub type SharedBookStore = Arc<dyn BookStore>;

/// Confirmation body for delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<BookStoreError> for AppError {
    fn from(err: BookStoreError) -> Self {
        if err.is_not_found() {
            AppError::not_found(err.to_string())
        } else {
            AppError::internal(err)
        }
    }
}

/// GET /books/
pub async fn get_all_books(
    State(store): State<SharedBookStore>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = store.get_all_books().await?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_book_by_id(
    State(store): State<SharedBookStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Path(id) = path?;
    let book = store.get_book_by_id(&id).await?;
    Ok(Json(book))
}

/// POST /books/
pub async fn create_book(
    State(store): State<SharedBookStore>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Json(request) = payload?;
    let book = store.create_book(request).await?;
    tracing::info!(book_id = book.id, "book created");
    Ok(Json(book))
}

/// PUT /books/{id}
pub async fn update_book_by_id(
    State(store): State<SharedBookStore>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<BookUpdateRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let book = store.update_book_by_id(&id, request).await?;
    tracing::info!(book_id = book.id, "book updated");
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete_book_by_id(
    State(store): State<SharedBookStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    store.delete_book_by_id(&id).await?;
    tracing::info!(book_id = %id, "book deleted");
    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}
