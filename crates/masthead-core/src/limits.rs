//! Length limits for titles, magazine names and categories
//!
//! Lengths are counted in characters, not bytes.

use crate::error::{Error, Result};
use serde_json::Value;

/// Minimum article title length (5 chars)
pub const MIN_TITLE_LEN: usize = 5;

/// Maximum article title length (50 chars)
pub const MAX_TITLE_LEN: usize = 50;

/// Minimum magazine name length (2 chars)
pub const MIN_MAGAZINE_NAME_LEN: usize = 2;

/// Maximum magazine name length (16 chars)
pub const MAX_MAGAZINE_NAME_LEN: usize = 16;

/// Minimum category length (1 char)
pub const MIN_CATEGORY_LEN: usize = 1;

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TitleLength { len: usize, min: usize, max: usize },
    MagazineNameLength { len: usize, min: usize, max: usize },
    EmptyCategory,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleLength { len, min, max } => write!(
                f,
                "Title must be between {} and {} characters long (got {})",
                min, max, len
            ),
            Self::MagazineNameLength { len, min, max } => write!(
                f,
                "Magazine name must be between {} and {} characters (got {})",
                min, max, len
            ),
            Self::EmptyCategory => write!(f, "Category must have length greater than 0"),
        }
    }
}

impl std::error::Error for ValidationError {}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validate article title
pub fn validate_title(title: &str) -> std::result::Result<(), ValidationError> {
    let len = char_len(title);
    if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&len) {
        return Err(ValidationError::TitleLength {
            len,
            min: MIN_TITLE_LEN,
            max: MAX_TITLE_LEN,
        });
    }
    Ok(())
}

/// Validate magazine name
pub fn validate_magazine_name(name: &str) -> std::result::Result<(), ValidationError> {
    let len = char_len(name);
    if !(MIN_MAGAZINE_NAME_LEN..=MAX_MAGAZINE_NAME_LEN).contains(&len) {
        return Err(ValidationError::MagazineNameLength {
            len,
            min: MIN_MAGAZINE_NAME_LEN,
            max: MAX_MAGAZINE_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate magazine category
pub fn validate_category(category: &str) -> std::result::Result<(), ValidationError> {
    if char_len(category) < MIN_CATEGORY_LEN {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

/// Borrow the string inside an untyped value, or fail with a type error
/// naming `field`.
pub fn expect_str<'a>(field: &'static str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or(Error::Type {
        field,
        found: json_type_name(value),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
