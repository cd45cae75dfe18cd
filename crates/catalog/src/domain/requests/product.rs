use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::{default_page, default_page_size};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(range(min = 1, message = "Category ID is required"))]
    #[schema(example = 1)]
    pub category_id: i32,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[schema(example = "Intro to Go")]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    #[schema(example = "intro-to-go")]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[validate(custom(function = validate_price))]
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,

    #[serde(default = "default_available")]
    pub available: bool,

    #[validate(range(min = 0, message = "Stock must be non-negative"))]
    #[schema(example = 12)]
    pub stock: i32,

    pub image: Option<String>,
    pub thumbnail: Option<String>,

    #[validate(length(max = 50, message = "Author must be at most 50 characters"))]
    #[serde(default = "default_author")]
    pub author: String,

    #[validate(length(max = 50, message = "Publisher must be at most 50 characters"))]
    #[serde(default = "default_publisher")]
    pub publisher: String,

    #[validate(length(max = 50, message = "ISBN must be at most 50 characters"))]
    #[serde(default = "default_isbn_no")]
    pub isbn_no: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub id: i32,

    #[validate(range(min = 1, message = "Category ID is required"))]
    #[schema(example = 1)]
    pub category_id: i32,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[schema(example = "Intro to Go")]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    #[schema(example = "intro-to-go")]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[validate(custom(function = validate_price))]
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,

    pub available: bool,

    #[validate(range(min = 0, message = "Stock must be non-negative"))]
    #[schema(example = 12)]
    pub stock: i32,

    pub image: Option<String>,
    pub thumbnail: Option<String>,

    #[validate(length(max = 50, message = "Author must be at most 50 characters"))]
    pub author: String,

    #[validate(length(max = 50, message = "Publisher must be at most 50 characters"))]
    pub publisher: String,

    #[validate(length(max = 50, message = "ISBN must be at most 50 characters"))]
    pub isbn_no: String,
}

fn default_available() -> bool {
    true
}

fn default_author() -> String {
    "Author_Name".to_string()
}

fn default_publisher() -> String {
    "Publisher_Name".to_string()
}

fn default_isbn_no() -> String {
    "isbn_no".to_string()
}

/// Prices are non-negative with at most two decimal places, matching the
/// NUMERIC(10, 2) column.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut err = ValidationError::new("price_negative");
        err.message = Some("Price must be non-negative".into());
        return Err(err);
    }

    if price.normalize().scale() > 2 {
        let mut err = ValidationError::new("price_scale");
        err.message = Some("Price must have at most two decimal places".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateProductRequest {
        CreateProductRequest {
            category_id: 1,
            name: "Intro to Go".to_string(),
            slug: "intro-to-go".to_string(),
            description: String::new(),
            price: Decimal::new(1999, 2),
            available: true,
            stock: 12,
            image: None,
            thumbnail: None,
            author: default_author(),
            publisher: default_publisher(),
            isbn_no: default_isbn_no(),
        }
    }

    #[test]
    fn valid_product_passes_validation() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut req = base_request();
        req.price = Decimal::new(-100, 2);

        assert!(req.validate().is_err());
    }

    #[test]
    fn three_decimal_places_fail_validation() {
        let mut req = base_request();
        req.price = Decimal::new(19_999, 3);

        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_stock_fails_validation() {
        let mut req = base_request();
        req.stock = -1;

        assert!(req.validate().is_err());
    }
}
