use crate::model::Rating as RatingModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RatingResponse {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<RatingModel> for RatingResponse {
    fn from(value: RatingModel) -> Self {
        RatingResponse {
            id: value.rating_id,
            user_id: value.user_id,
            product_id: value.product_id,
            rating: value.rating,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
