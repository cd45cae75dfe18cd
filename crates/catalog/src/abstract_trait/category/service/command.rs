use crate::domain::{
    requests::{CreateCategoryRequest, UpdateCategoryRequest},
    response::{ApiResponse, CategoryResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait CategoryCommandServiceTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete_category(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
