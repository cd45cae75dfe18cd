use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{default_page, default_page_size};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllRatings {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRatingRequest {
    #[validate(range(min = 1, message = "User ID is required"))]
    #[schema(example = 1)]
    pub user_id: i32,

    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    #[schema(example = 4)]
    pub rating: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRatingRequest {
    pub id: i32,

    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    #[schema(example = 4)]
    pub rating: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_rating(rating: i32) -> CreateRatingRequest {
        CreateRatingRequest {
            user_id: 1,
            product_id: 1,
            rating,
        }
    }

    #[test]
    fn boundary_ratings_pass_validation() {
        assert!(request_with_rating(0).validate().is_ok());
        assert!(request_with_rating(5).validate().is_ok());
    }

    #[test]
    fn out_of_range_ratings_fail_validation() {
        assert!(request_with_rating(-1).validate().is_err());
        assert!(request_with_rating(6).validate().is_err());
    }
}
