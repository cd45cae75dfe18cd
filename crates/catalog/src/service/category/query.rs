use crate::{
    abstract_trait::category::{
        repository::DynCategoryQueryRepository, service::CategoryQueryServiceTrait,
    },
    domain::{
        requests::FindAllCategories,
        response::{ApiResponse, ApiResponsePagination, CategoryResponse, Pagination},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryQueryService {
    pub query: DynCategoryQueryRepository,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError> {
        info!(
            "🔍 Finding all categories | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        let normalized = FindAllCategories {
            page,
            page_size,
            search: req.search.clone(),
        };

        let (categories, total) = self.query.find_all(&normalized).await.map_err(|e| {
            error!("❌ Failed to fetch all categories: {e:?}");
            ServiceError::Repo(e)
        })?;

        let data: Vec<CategoryResponse> = categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect();
        let total_pages = ((total - 1).max(0) / page_size as i64) + 1;

        info!("✅ Found {} categories (total: {total})", data.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Categories retrieved successfully".to_string(),
            data,
            pagination: Pagination {
                page,
                page_size,
                total_items: total as i32,
                total_pages: total_pages as i32,
            },
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🆔 Finding category by ID: {id}");

        let category = match self.query.find_by_id(id).await {
            Ok(Some(category)) => category,
            Ok(None) => {
                error!("❌ Category not found with ID: {id}");
                return Err(ServiceError::Custom("Category not found".to_string()));
            }
            Err(e) => {
                error!("❌ Database error while finding category ID {id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category retrieved successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🔖 Finding category by slug: {slug}");

        let category = match self.query.find_by_slug(slug).await {
            Ok(Some(category)) => category,
            Ok(None) => {
                error!("❌ Category not found with slug: {slug}");
                return Err(ServiceError::Custom("Category not found".to_string()));
            }
            Err(e) => {
                error!("❌ Database error while finding category '{slug}': {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category retrieved successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }
}
