use crate::{
    abstract_trait::rating::{
        repository::DynRatingQueryRepository, service::RatingQueryServiceTrait,
    },
    domain::{
        requests::FindAllRatings,
        response::{ApiResponse, ApiResponsePagination, Pagination, RatingResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct RatingQueryService {
    pub query: DynRatingQueryRepository,
}

impl RatingQueryService {
    pub fn new(query: DynRatingQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl RatingQueryServiceTrait for RatingQueryService {
    async fn find_by_product(
        &self,
        product_id: i32,
        req: &FindAllRatings,
    ) -> Result<ApiResponsePagination<Vec<RatingResponse>>, ServiceError> {
        info!(
            "🔍 Finding ratings for product {product_id} | Page: {}, Size: {}",
            req.page, req.page_size
        );

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        let normalized = FindAllRatings { page, page_size };

        let (ratings, total) = self
            .query
            .find_by_product(product_id, &normalized)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch ratings for product {product_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        let data: Vec<RatingResponse> = ratings.into_iter().map(RatingResponse::from).collect();
        let total_pages = ((total - 1).max(0) / page_size as i64) + 1;

        info!("✅ Found {} ratings (total: {total})", data.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Ratings retrieved successfully".to_string(),
            data,
            pagination: Pagination {
                page,
                page_size,
                total_items: total as i32,
                total_pages: total_pages as i32,
            },
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<RatingResponse>, ServiceError> {
        info!("🆔 Finding rating by ID: {id}");

        let rating = match self.query.find_by_id(id).await {
            Ok(Some(rating)) => rating,
            Ok(None) => {
                error!("❌ Rating not found with ID: {id}");
                return Err(ServiceError::Custom("Rating not found".to_string()));
            }
            Err(e) => {
                error!("❌ Database error while finding rating ID {id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Rating retrieved successfully".to_string(),
            data: RatingResponse::from(rating),
        })
    }
}
