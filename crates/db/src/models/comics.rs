//! Comics entity model and DTOs.

use comics_core::types::ComicId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `comics` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Comics {
    pub id: ComicId,
    pub name: String,
    #[sqlx(try_from = "i64")]
    pub price: u64,
    pub description: Option<String>,
    #[sqlx(try_from = "i64")]
    pub year: u64,
    pub image: Option<String>,
}

/// DTO for creating a new comics record. The id is assigned on insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComics {
    #[validate(custom(function = "comics_core::comics::validate_name"))]
    pub name: String,
    #[validate(custom(function = "comics_core::comics::validate_storable"))]
    pub price: u64,
    pub description: Option<String>,
    #[validate(custom(function = "comics_core::comics::validate_storable"))]
    pub year: u64,
    pub image: Option<String>,
}

/// DTO for the price update. Any other fields in the body are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateComicsPrice {
    #[validate(custom(function = "comics_core::comics::validate_storable"))]
    pub price: u64,
}

impl Comics {
    /// Build the row a [`CreateComics`] produces once an id is assigned.
    pub fn from_input(id: ComicId, input: &CreateComics) -> Self {
        Self {
            id,
            name: input.name.clone(),
            price: input.price,
            description: input.description.clone(),
            year: input.year,
            image: input.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_allows_missing_optional_fields() {
        let input: CreateComics =
            serde_json::from_str(r#"{"name":"Watchmen","price":1500,"year":1986}"#).unwrap();
        assert_eq!(input.description, None);
        assert_eq!(input.image, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_dto_rejects_negative_price() {
        let result =
            serde_json::from_str::<CreateComics>(r#"{"name":"X","price":-1,"year":1986}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_dto_rejects_blank_name() {
        let input: CreateComics =
            serde_json::from_str(r#"{"name":"  ","price":1,"year":1986}"#).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn price_above_bigint_range_fails_validation() {
        let input = UpdateComicsPrice { price: u64::MAX };
        assert!(input.validate().is_err());
    }

    #[test]
    fn year_above_bigint_range_fails_validation() {
        let input = CreateComics {
            name: "Watchmen".to_string(),
            price: 1500,
            description: None,
            year: u64::MAX,
            image: None,
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("year"));
        assert!(!fields.contains_key("price"));
    }

    #[test]
    fn update_dto_ignores_unrelated_fields() {
        let input: UpdateComicsPrice =
            serde_json::from_str(r#"{"price":2000,"name":"ignored"}"#).unwrap();
        assert_eq!(input.price, 2000);
    }
}
