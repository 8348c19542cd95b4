pub mod controller;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod routes;
pub mod store;

use async_trait::async_trait;
use axum::Router;
use bookstore_kernel::{InitCtx, Module};

pub use controller::SharedBookStore;
pub use memory::InMemoryBookStore;
pub use models::{Book, BookRequest, BookResponse, BookUpdateRequest};
pub use postgres::PostgresBookStore;
pub use repository::BookRepository;
pub use store::{BookStore, BookStoreError};

/// Books module: CRUD over book records through a [`BookStore`]
pub struct BooksModule {
    store: SharedBookStore,
}

impl BooksModule {
    pub fn new(store: SharedBookStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let error_response = |description: &str| {
            serde_json::json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                    }
                }
            })
        };
        let book_response = |description: &str| {
            serde_json::json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/BookResponse" }
                    }
                }
            })
        };
        let json_body = |schema: &str| {
            serde_json::json!({
                "required": true,
                "content": {
                    "application/json": {
                        "schema": { "$ref": format!("#/components/schemas/{schema}") }
                    }
                }
            })
        };
        let id_param = serde_json::json!([{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": { "type": "string" }
        }]);
        let book_fields = serde_json::json!({
            "name": { "type": "string", "description": "Title of the book" },
            "author": { "type": "string", "description": "Author of the book" },
            "publication": { "type": "string", "description": "Publisher of the book" }
        });

        let mut response_fields = book_fields.clone();
        response_fields["id"] = serde_json::json!({ "type": "integer", "format": "int64" });
        response_fields["created_at"] = serde_json::json!({ "type": "string", "format": "date-time" });
        response_fields["updated_at"] = serde_json::json!({ "type": "string", "format": "date-time" });

        let mut update_fields = book_fields.clone();
        update_fields["updated_at"] = serde_json::json!({
            "type": "string",
            "format": "date-time",
            "description": "Accepted but ignored; the server stamps the update time"
        });

        Some(serde_json::json!({
            "paths": {
                "/books/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Every stored book",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/BookResponse" }
                                        }
                                    }
                                }
                            },
                            "500": error_response("Storage failure")
                        }
                    },
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": json_body("BookRequest"),
                        "responses": {
                            "200": book_response("The stored book"),
                            "400": error_response("Malformed body"),
                            "500": error_response("Storage failure")
                        }
                    }
                },
                "/books/{id}": {
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "parameters": id_param.clone(),
                        "responses": {
                            "200": book_response("The book"),
                            "400": error_response("Undecodable id"),
                            "404": error_response("No book with this id"),
                            "500": error_response("Storage failure")
                        }
                    },
                    "put": {
                        "summary": "Replace a book's fields",
                        "tags": ["Books"],
                        "parameters": id_param.clone(),
                        "requestBody": json_body("BookUpdateRequest"),
                        "responses": {
                            "200": book_response("The updated book"),
                            "400": error_response("Malformed body"),
                            "500": error_response("Storage failure or unknown id")
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": id_param,
                        "responses": {
                            "200": {
                                "description": "Deleted, or nothing to delete",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": { "message": { "type": "string" } },
                                            "required": ["message"]
                                        }
                                    }
                                }
                            },
                            "400": error_response("Undecodable id"),
                            "500": error_response("Storage failure")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "BookRequest": {
                        "type": "object",
                        "properties": book_fields,
                        "required": ["name", "author", "publication"]
                    },
                    "BookUpdateRequest": {
                        "type": "object",
                        "properties": update_fields,
                        "required": ["name", "author", "publication"]
                    },
                    "BookResponse": {
                        "type": "object",
                        "properties": response_fields,
                        "required": ["id", "name", "author", "publication", "created_at", "updated_at"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create the books module over the given store
pub fn create_module(store: SharedBookStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(store))
}
