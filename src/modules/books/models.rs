use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use shelf_http::validation::{check_exclusive_range, check_length, Violations};
use shelf_http::{FieldViolation, Validate};
use utoipa::ToSchema;

/// A book record held by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Identifier assigned by the server
    pub id: i64,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Short description of the book
    pub description: String,
    /// Rating from 1 to 5
    pub rating: i64,
}

/// Payload accepted by the create and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "title": "A new book",
    "author": "author example",
    "description": "A new description of a book",
    "rating": 5
}))]
pub struct BookRequest {
    /// ID is not needed on create; the server assigns it
    #[serde(default, deserialize_with = "lenient_optional_int")]
    pub id: Option<i64>,
    #[schema(min_length = 3)]
    pub title: String,
    #[schema(min_length = 1)]
    pub author: String,
    #[schema(min_length = 1, max_length = 100)]
    pub description: String,
    #[schema(exclusive_minimum = 0, exclusive_maximum = 6)]
    #[serde(deserialize_with = "lenient_int")]
    pub rating: i64,
}

/// Integers may arrive as `5`, `5.0` or `"5"`; fractional values are refused.
fn int_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    int_from_value(&value)
        .ok_or_else(|| de::Error::custom(format!("expected an integer, found {value}")))
}

fn lenient_optional_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => int_from_value(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected an integer, found {value}"))),
    }
}

impl BookRequest {
    /// Turn the payload into a record carrying `id`, discarding any client id.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            rating: self.rating,
        }
    }
}

impl Validate for BookRequest {
    fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Violations::new();
        violations
            .check(check_length("title", &self.title, 3, None))
            .check(check_length("author", &self.author, 1, None))
            .check(check_length("description", &self.description, 1, Some(100)))
            .check(check_exclusive_range("rating", self.rating, 0, 6));
        violations.finish()
    }
}

/// Query parameters for the rating filter.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingQuery {
    pub book_rating: i64,
}

/// Response body of a successful update.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookUpdated {
    pub message: String,
    pub book: Book,
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

    #[test]
    fn valid_request_passes() {
        assert!(request("A new book", 5).validate().is_ok());
        assert!(request("abc", 1).validate().is_ok());
    }

    #[test]
    fn rating_bounds_are_exclusive() {
        for rating in [0, 6, -1] {
            let violations = request("A new book", rating).validate().unwrap_err();
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "rating");
        }
    }

    #[test]
    fn short_title_fails() {
        let violations = request("ab", 3).validate().unwrap_err();
        assert_eq!(violations[0].field, "title");
    }

    #[test]
    fn description_limit_is_one_hundred_characters() {
        let mut payload = request("A new book", 3);
        payload.description = "é".repeat(100);
        assert!(payload.validate().is_ok());

        payload.description.push('é');
        let violations = payload.validate().unwrap_err();
        assert_eq!(violations[0].field, "description");
    }

    #[test]
    fn every_violation_is_reported() {
        let payload = BookRequest {
            id: Some(99),
            title: String::new(),
            author: String::new(),
            description: String::new(),
            rating: 0,
        };
        let fields: Vec<_> = payload
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec!["title", "author", "description", "rating"]);
    }

    #[test]
    fn client_id_is_discarded() {
        let mut payload = request("A new book", 5);
        payload.id = Some(42);
        assert_eq!(payload.into_book(8).id, 8);
    }

    #[test]
    fn id_is_optional_on_input() {
        let payload: BookRequest = serde_json::from_value(serde_json::json!({
            "title": "A new book",
            "author": "author example",
            "description": "A new description of a book",
            "rating": 5
        }))
        .unwrap();
        assert!(payload.id.is_none());
    }

    fn parse(rating: Value) -> Result<BookRequest, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "id": "4",
            "title": "A new book",
            "author": "author example",
            "description": "A new description of a book",
            "rating": rating
        }))
    }

    #[test]
    fn integer_strings_and_whole_floats_are_accepted() {
        assert_eq!(parse(serde_json::json!("5")).unwrap().rating, 5);
        assert_eq!(parse(serde_json::json!(5.0)).unwrap().rating, 5);
        assert_eq!(parse(serde_json::json!(2)).unwrap().id, Some(4));
    }

    #[test]
    fn fractional_and_non_numeric_ratings_are_rejected() {
        assert!(parse(serde_json::json!(4.5)).is_err());
        assert!(parse(serde_json::json!("five")).is_err());
        assert!(parse(Value::Null).is_err());
    }
}
