//! Field-level validation for request payloads.

use serde::Serialize;
use serde_json::json;

use crate::error::AppError;

/// Validation error codes reported in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    TooShort,
    TooLong,
    OutOfRange,
    InvalidValue,
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    pub fn to_detail(&self) -> serde_json::Value {
        json!({
            "field": self.field,
            "code": self.code,
            "message": self.message,
        })
    }
}

/// Request payloads that check their own field constraints.
pub trait Validate {
    /// Returns every violated rule, or `Ok(())` when the payload is acceptable.
    fn validate(&self) -> Result<(), Vec<FieldViolation>>;
}

/// Collects violations across several field rules.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a single rule.
    pub fn check(&mut self, outcome: Result<(), FieldViolation>) -> &mut Self {
        if let Err(violation) = outcome {
            self.0.push(violation);
        }
        self
    }

    pub fn finish(self) -> Result<(), Vec<FieldViolation>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

/// Character-count bounds, inclusive on both ends.
pub fn check_length(
    field: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), FieldViolation> {
    let length = value.chars().count();

    if length < min {
        return Err(FieldViolation::new(
            field,
            ViolationCode::TooShort,
            format!("{field} must have at least {min} characters"),
        ));
    }

    match max {
        Some(max) if length > max => Err(FieldViolation::new(
            field,
            ViolationCode::TooLong,
            format!("{field} must have at most {max} characters"),
        )),
        _ => Ok(()),
    }
}

/// Integer strictly between `gt` and `lt`.
pub fn check_exclusive_range(field: &str, value: i64, gt: i64, lt: i64) -> Result<(), FieldViolation> {
    if value > gt && value < lt {
        Ok(())
    } else {
        Err(FieldViolation::new(
            field,
            ViolationCode::OutOfRange,
            format!("{field} must be greater than {gt} and less than {lt}"),
        ))
    }
}

impl From<Vec<FieldViolation>> for AppError {
    fn from(violations: Vec<FieldViolation>) -> Self {
        let details = violations.iter().map(FieldViolation::to_detail).collect();
        AppError::validation(details, "request validation failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        // "Olá" is three characters but four bytes.
        assert!(check_length("title", "Olá", 3, None).is_ok());
        assert!(check_length("title", "Oá", 3, None).is_err());
    }

    #[test]
    fn length_upper_bound_is_inclusive() {
        let hundred = "x".repeat(100);
        let hundred_one = "x".repeat(101);

        assert!(check_length("description", &hundred, 1, Some(100)).is_ok());
        let violation = check_length("description", &hundred_one, 1, Some(100)).unwrap_err();
        assert_eq!(violation.code, ViolationCode::TooLong);
    }

    #[test]
    fn empty_string_is_too_short() {
        let violation = check_length("author", "", 1, None).unwrap_err();
        assert_eq!(violation.code, ViolationCode::TooShort);
        assert_eq!(violation.field, "author");
    }

    #[test]
    fn exclusive_range_rejects_bounds() {
        assert!(check_exclusive_range("rating", 0, 0, 6).is_err());
        assert!(check_exclusive_range("rating", 1, 0, 6).is_ok());
        assert!(check_exclusive_range("rating", 5, 0, 6).is_ok());
        assert!(check_exclusive_range("rating", 6, 0, 6).is_err());
    }

    #[test]
    fn violations_collect_every_failure() {
        let mut violations = Violations::new();
        violations
            .check(check_length("title", "ab", 3, None))
            .check(check_length("author", "someone", 1, None))
            .check(check_exclusive_range("rating", 9, 0, 6));

        let errors = violations.finish().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "rating"]);
    }

    #[test]
    fn violations_convert_into_validation_error() {
        let error: AppError =
            vec![FieldViolation::new("rating", ViolationCode::OutOfRange, "bad")].into();

        match error {
            AppError::Validation { details, .. } => {
                assert_eq!(details[0]["code"], "out_of_range");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
