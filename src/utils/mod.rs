//! Project-specific utilities live here.

/// Formats a shared log prefix for project logs.
pub fn log_prefix(module: &str) -> String {
    format!("shelf::{module}")
}

/// JSON rendering of a type's OpenAPI schema, for module `openapi()` fragments.
pub fn schema_json<T: utoipa::PartialSchema>() -> serde_json::Value {
    serde_json::to_value(T::schema()).unwrap_or_default()
}
