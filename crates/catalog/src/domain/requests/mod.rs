mod category;
mod product;
mod rating;

pub use self::category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
pub use self::rating::{CreateRatingRequest, FindAllRatings, UpdateRatingRequest};

use validator::ValidationErrors;

/// Flattens validator output into one message per failed rule.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            messages.push(format!("{field}: {message}"));
        }
    }

    messages
}

pub(crate) fn default_page() -> i32 {
    1
}

pub(crate) fn default_page_size() -> i32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn validation_messages_name_the_field() {
        let req = CreateRatingRequest {
            user_id: 1,
            product_id: 1,
            rating: 9,
        };

        let errors = req.validate().unwrap_err();
        let messages = validation_messages(&errors);

        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("rating:"));
    }
}
