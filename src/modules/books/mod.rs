pub mod models;
pub mod routes;
pub mod seed;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use shelf_kernel::{InitCtx, Module};

use crate::utils::schema_json;
use store::BookStore;

/// In-memory book catalog with CRUD routes
pub struct BooksModule {
    store: Arc<BookStore>,
}

impl BooksModule {
    /// Module backed by the seed catalog
    pub fn new() -> Self {
        Self::with_store(Arc::new(BookStore::seeded()))
    }

    pub fn with_store(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<BookStore> {
        &self.store
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let books = self.store.len().await;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(Arc::clone(&self.store))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/books": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Every book in catalog order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/books/": {
                    "get": {
                        "summary": "List books with a rating",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "book_rating",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "integer", "format": "int64" }
                        }],
                        "responses": {
                            "200": {
                                "description": "Books whose rating matches, possibly none",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            },
                            "422": validation_error_response()
                        }
                    }
                },
                "/books/{book_id}": {
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "parameters": [book_id_parameter()],
                        "responses": {
                            "200": {
                                "description": "The book, or null when no book has this id",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "422": validation_error_response()
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": [book_id_parameter()],
                        "responses": {
                            "200": { "description": "Deleted, or nothing to delete" },
                            "422": validation_error_response()
                        }
                    }
                },
                "/books/update_book/{book_id}": {
                    "put": {
                        "summary": "Replace a book",
                        "tags": ["Books"],
                        "parameters": [book_id_parameter()],
                        "requestBody": book_request_body(),
                        "responses": {
                            "200": {
                                "description": "Book replaced",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookUpdated" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            },
                            "422": validation_error_response()
                        }
                    }
                },
                "/create-book": {
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": book_request_body(),
                        "responses": {
                            "200": { "description": "Book appended to the catalog" },
                            "422": validation_error_response()
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": schema_json::<models::Book>(),
                    "BookRequest": schema_json::<models::BookRequest>(),
                    "BookUpdated": schema_json::<models::BookUpdated>()
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let books = self.store.len().await;
        tracing::info!(
            module = self.name(),
            books,
            "books module stopped, catalog discarded"
        );
        Ok(())
    }
}

fn book_id_parameter() -> serde_json::Value {
    json!({
        "name": "book_id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    })
}

fn book_request_body() -> serde_json::Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/BookRequest" }
            }
        }
    })
}

fn validation_error_response() -> serde_json::Value {
    json!({
        "description": "Validation error",
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

/// Create a new instance of the books module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BooksModule::new())
}
