use crate::domain::{
    requests::FindAllProducts,
    response::{
        ApiResponse, ApiResponsePagination, ProductResponse, ProductScoreResponse,
        TrendingProductResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_category_slug(
        &self,
        slug: &str,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn weighted_score(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductScoreResponse>, ServiceError>;
    async fn find_trending(
        &self,
        limit: i64,
    ) -> Result<ApiResponse<Vec<TrendingProductResponse>>, ServiceError>;
}
