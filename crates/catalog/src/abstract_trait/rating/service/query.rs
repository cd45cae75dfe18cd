use crate::domain::{
    requests::FindAllRatings,
    response::{ApiResponse, ApiResponsePagination, RatingResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait RatingQueryServiceTrait {
    async fn find_by_product(
        &self,
        product_id: i32,
        req: &FindAllRatings,
    ) -> Result<ApiResponsePagination<Vec<RatingResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<RatingResponse>, ServiceError>;
}
