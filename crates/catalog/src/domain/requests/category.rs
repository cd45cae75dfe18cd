use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{default_page, default_page_size};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllCategories {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    #[schema(example = "Programming")]
    pub name: String,

    #[validate(length(min = 1, max = 150, message = "Slug must be 1-150 characters"))]
    #[schema(example = "programming")]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    pub id: i32,

    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    #[schema(example = "Programming")]
    pub name: String,

    #[validate(length(min = 1, max = 150, message = "Slug must be 1-150 characters"))]
    #[schema(example = "programming")]
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slug_fails_validation() {
        let req = CreateCategoryRequest {
            name: "Programming".to_string(),
            slug: String::new(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn valid_category_passes_validation() {
        let req = CreateCategoryRequest {
            name: "Programming".to_string(),
            slug: "programming".to_string(),
        };

        assert!(req.validate().is_ok());
    }
}
