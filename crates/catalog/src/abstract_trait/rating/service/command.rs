use crate::domain::{
    requests::{CreateRatingRequest, UpdateRatingRequest},
    response::{ApiResponse, RatingResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait RatingCommandServiceTrait {
    async fn create_rating(
        &self,
        req: &CreateRatingRequest,
    ) -> Result<ApiResponse<RatingResponse>, ServiceError>;
    async fn update_rating(
        &self,
        req: &UpdateRatingRequest,
    ) -> Result<ApiResponse<RatingResponse>, ServiceError>;
    async fn delete_rating(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
