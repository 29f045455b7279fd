//! In-memory book catalog.

use tokio::sync::RwLock;

use super::models::{Book, BookRequest};
use super::seed;

/// Ordered collection of books guarded by a single lock.
///
/// Lookups scan in insertion order. Update replaces a record at its index, so
/// order only changes through create (append) and delete.
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// Store holding the seed catalog
    pub fn seeded() -> Self {
        Self::new(seed::catalog())
    }

    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    /// First book with `id`
    pub async fn find(&self, id: i64) -> Option<Book> {
        self.books.read().await.iter().find(|book| book.id == id).cloned()
    }

    pub async fn by_rating(&self, rating: i64) -> Vec<Book> {
        self.books
            .read()
            .await
            .iter()
            .filter(|book| book.rating == rating)
            .cloned()
            .collect()
    }

    /// Append a new book and return it with its assigned id.
    pub async fn create(&self, request: BookRequest) -> Book {
        let mut books = self.books.write().await;
        let book = request.into_book(next_id(&books));
        books.push(book.clone());
        book
    }

    /// Replace the first book with `id`, keeping the id. `None` when absent.
    pub async fn update(&self, id: i64, request: BookRequest) -> Option<Book> {
        let mut books = self.books.write().await;
        let slot = books.iter_mut().find(|book| book.id == id)?;
        *slot = request.into_book(id);
        Some(slot.clone())
    }

    /// Remove the first book with `id`. Absent ids are a no-op.
    pub async fn delete(&self, id: i64) -> Option<Book> {
        let mut books = self.books.write().await;
        let index = books.iter().position(|book| book.id == id)?;
        Some(books.remove(index))
    }

    /// Id the next created book would receive
    pub async fn next_id(&self) -> i64 {
        next_id(&self.books.read().await)
    }
}

/// Last record's id plus one, or 1 for an empty catalog.
///
/// Ids are not reserved: deleting the last book frees its id for the next
/// create.
fn next_id(books: &[Book]) -> i64 {
    books.last().map_or(1, |book| book.id + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, rating: i64) -> BookRequest {
        BookRequest {
            id: None,
            title: title.to_string(),
            author: "author example".to_string(),
            description: "A new description of a book".to_string(),
            rating,
        }
    }

    #[tokio::test]
    async fn seeded_store_lists_seven_books_in_order() {
        let store = BookStore::seeded();
        let books = store.list().await;

        assert_eq!(books.len(), 7);
        assert_eq!(books[0].title, "Computer Science Pro");
        assert_eq!(books[6].title, "Effective Python");
    }

    #[tokio::test]
    async fn find_returns_matching_book() {
        let store = BookStore::seeded();

        assert_eq!(store.find(2).await.unwrap().title, "Clean Code");
        assert!(store.find(99).await.is_none());
    }

    #[tokio::test]
    async fn by_rating_filters() {
        let store = BookStore::seeded();

        let fours: Vec<_> = store.by_rating(4).await.into_iter().map(|b| b.id).collect();
        assert_eq!(fours, vec![5, 7]);
        assert!(store.by_rating(1).await.is_empty());
    }

    #[tokio::test]
    async fn create_appends_with_next_id() {
        let store = BookStore::seeded();

        let created = store.create(request("A new book", 5)).await;
        assert_eq!(created.id, 8);
        assert_eq!(store.len().await, 8);
        assert_eq!(store.list().await.last(), Some(&created));
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let store = BookStore::seeded();
        let mut payload = request("A new book", 5);
        payload.id = Some(1);

        assert_eq!(store.create(payload).await.id, 8);
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = BookStore::default();
        assert!(store.is_empty().await);

        assert_eq!(store.create(request("First", 3)).await.id, 1);
        assert_eq!(store.create(request("Second", 3)).await.id, 2);
    }

    #[tokio::test]
    async fn deleting_last_book_reuses_its_id() {
        let store = BookStore::seeded();

        store.delete(7).await.unwrap();
        assert_eq!(store.next_id().await, 7);
        assert_eq!(store.create(request("Replacement", 2)).await.id, 7);
    }

    #[tokio::test]
    async fn deleting_middle_book_keeps_sequence() {
        let store = BookStore::seeded();

        store.delete(3).await.unwrap();
        assert_eq!(store.create(request("Another", 2)).await.id, 8);
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_keeps_id() {
        let store = BookStore::seeded();
        let mut payload = request("Clean Architecture", 3);
        payload.id = Some(500);

        let updated = store.update(2, payload).await.unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.title, "Clean Architecture");
        assert_eq!(updated.rating, 3);

        let books = store.list().await;
        assert_eq!(books[1], updated);
        assert_eq!(books.len(), 7);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let store = BookStore::seeded();
        assert!(store.update(42, request("Nothing", 1)).await.is_none());
        assert_eq!(store.list().await, seed::catalog());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_noop() {
        let store = BookStore::seeded();
        assert!(store.delete(42).await.is_none());
        assert_eq!(store.list().await, seed::catalog());
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(BookStore::seeded());

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move { store.create(request(&format!("Book {n}"), 3)).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (8..24).collect::<Vec<_>>());
    }
}
