//! Catalog loaded into every fresh process.

use super::models::Book;

const SEED: &[(i64, &str, &str, &str, i64)] = &[
    (
        1,
        "Computer Science Pro",
        "codingwithroby",
        "A very nice book!",
        5,
    ),
    (
        2,
        "Clean Code",
        "Robert C. Martin",
        "Princípios de desenvolvimento ágil e boas práticas de código.",
        5,
    ),
    (
        3,
        "Design Patterns",
        "Erich Gamma, Richard Helm, Ralph Johnson, John Vlissides",
        "Padrões de projeto para soluções recorrentes em desenvolvimento de software.",
        5,
    ),
    (
        4,
        "Introduction to Algorithms",
        "Thomas H. Cormen, Charles E. Leiserson, Ronald L. Rivest, Clifford Stein",
        "Manual abrangente de algoritmos e suas aplicações.",
        5,
    ),
    (
        5,
        "Python Crash Course",
        "Eric Matthes",
        "Uma introdução rápida e detalhada à linguagem Python.",
        4,
    ),
    (
        6,
        "The Pragmatic Programmer",
        "Andrew Hunt, David Thomas",
        "Conselhos e práticas para escrever código mais sólido, reutilizável e flexível.",
        5,
    ),
    (
        7,
        "Effective Python",
        "Brett Slatkin",
        "Dicas e truques para melhorar sua proficiência em Python.",
        4,
    ),
];

/// The seven books every process starts with.
pub fn catalog() -> Vec<Book> {
    SEED.iter()
        .map(|&(id, title, author, description, rating)| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::books::models::BookRequest;
    use shelf_http::Validate;

    #[test]
    fn seed_has_seven_sequential_books() {
        let books = catalog();
        let ids: Vec<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn seed_satisfies_request_rules() {
        for book in catalog() {
            let request = BookRequest {
                id: Some(book.id),
                title: book.title,
                author: book.author,
                description: book.description,
                rating: book.rating,
            };
            assert!(request.validate().is_ok(), "seed book {} is invalid", book.id);
        }
    }
}
