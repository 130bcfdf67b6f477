//! Field rules for comics records.
//!
//! The functions here follow the `validator` custom-function signature so the
//! request DTOs in `comics-db` can reference them from `#[validate(custom(..))]`.

use std::borrow::Cow;

use validator::ValidationError;

use crate::types::MAX_STORED_UNSIGNED;

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Comics";

/// Maximum length of a comics name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// A name must contain at least one non-whitespace character and be at most
/// [`MAX_NAME_LEN`] characters long.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(error("blank", "Name must not be empty".into()));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(error(
            "too_long",
            format!("Name must be at most {MAX_NAME_LEN} characters, got {len}").into(),
        ));
    }
    Ok(())
}

/// Prices and years are unsigned but stored as `BIGINT`. `validator` hands
/// `Copy` fields to custom functions by value.
pub fn validate_storable(value: u64) -> Result<(), ValidationError> {
    if value > MAX_STORED_UNSIGNED {
        return Err(error(
            "out_of_range",
            format!("Value {value} exceeds the maximum of {MAX_STORED_UNSIGNED}").into(),
        ));
    }
    Ok(())
}

fn error(code: &'static str, message: Cow<'static, str>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message);
    err
}
