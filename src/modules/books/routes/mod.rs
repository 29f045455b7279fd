use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use shelf_http::{ApiPath, ApiQuery, AppError, ValidatedJson};

use super::models::{Book, BookRequest, BookUpdated, RatingQuery};
use super::store::BookStore;
use crate::utils;

pub const BOOK_NOT_FOUND: &str = "Livro não encontrado";
pub const BOOK_UPDATED: &str = "Livro atualizado com sucesso!";

/// HTTP routes for the books module.
pub fn router(store: Arc<BookStore>) -> Router {
    let prefix = utils::log_prefix("books");
    tracing::debug!(target: "project.routes", %prefix, "registering books routes");

    Router::new()
        .route("/books", get(read_all_books))
        .route("/books/", get(read_books_by_rating))
        .route("/books/{book_id}", get(read_book).delete(delete_book))
        .route("/books/update_book/{book_id}", put(update_book))
        .route("/create-book", post(create_book))
        .with_state(store)
}

async fn read_all_books(State(store): State<Arc<BookStore>>) -> Json<Vec<Book>> {
    Json(store.list().await)
}

/// Unknown ids answer `null` rather than 404.
async fn read_book(
    State(store): State<Arc<BookStore>>,
    ApiPath(book_id): ApiPath<i64>,
) -> Json<Option<Book>> {
    Json(store.find(book_id).await)
}

async fn read_books_by_rating(
    State(store): State<Arc<BookStore>>,
    ApiQuery(query): ApiQuery<RatingQuery>,
) -> Json<Vec<Book>> {
    Json(store.by_rating(query.book_rating).await)
}

/// Responds with `null`; the assigned id is only visible through the log and
/// subsequent reads.
async fn create_book(
    State(store): State<Arc<BookStore>>,
    ValidatedJson(request): ValidatedJson<BookRequest>,
) -> Json<()> {
    let book = store.create(request).await;
    tracing::info!(book_id = book.id, title = %book.title, "book created");
    Json(())
}

async fn update_book(
    State(store): State<Arc<BookStore>>,
    ApiPath(book_id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<BookRequest>,
) -> Result<Json<BookUpdated>, AppError> {
    let book = store
        .update(book_id, request)
        .await
        .ok_or_else(|| AppError::not_found(BOOK_NOT_FOUND))?;

    tracing::info!(book_id, "book updated");
    Ok(Json(BookUpdated {
        message: BOOK_UPDATED.to_string(),
        book,
    }))
}

/// Unknown ids are ignored.
async fn delete_book(
    State(store): State<Arc<BookStore>>,
    ApiPath(book_id): ApiPath<i64>,
) -> Json<()> {
    match store.delete(book_id).await {
        Some(book) => tracing::info!(book_id, title = %book.title, "book deleted"),
        None => tracing::debug!(book_id, "delete ignored, no such book"),
    }
    Json(())
}
