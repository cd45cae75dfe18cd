use crate::domain::{
    requests::FindAllCategories,
    response::{ApiResponse, ApiResponsePagination, CategoryResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn find_by_slug(&self, slug: &str)
    -> Result<ApiResponse<CategoryResponse>, ServiceError>;
}
