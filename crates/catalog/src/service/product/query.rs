use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::FindAllProducts,
        response::{
            ApiResponse, ApiResponsePagination, Pagination, ProductResponse, ProductScoreResponse,
            TrendingProductResponse,
        },
    },
    model::weighted_score,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }

    fn paginate(total: i64, page: i32, page_size: i32) -> Pagination {
        let total_pages = ((total - 1).max(0) / page_size as i64) + 1;

        Pagination {
            page,
            page_size,
            total_items: total as i32,
            total_pages: total_pages as i32,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        let normalized = FindAllProducts {
            page,
            page_size,
            search: req.search.clone(),
        };

        let (products, total) = self.query.find_all(&normalized).await.map_err(|e| {
            error!("❌ Failed to fetch all products: {e:?}");
            ServiceError::Repo(e)
        })?;

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} products (total: {total})", data.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
            pagination: Self::paginate(total, page, page_size),
        })
    }

    async fn find_by_category_slug(
        &self,
        slug: &str,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!("🔍 Finding products for category '{slug}'");

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        let normalized = FindAllProducts {
            page,
            page_size,
            search: req.search.clone(),
        };

        let (products, total) = self
            .query
            .find_by_category_slug(slug, &normalized)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products for category '{slug}': {e:?}");
                ServiceError::Repo(e)
            })?;

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!(
            "✅ Found {} products in category '{slug}' (total: {total})",
            data.len()
        );

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
            pagination: Self::paginate(total, page, page_size),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let product = match self.query.find_by_id(id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                error!("❌ Product not found with ID: {id}");
                return Err(ServiceError::Custom("Product not found".to_string()));
            }
            Err(e) => {
                error!("❌ Database error while finding product ID {id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn weighted_score(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductScoreResponse>, ServiceError> {
        info!("⚖️ Computing weighted score for product ID: {product_id}");

        match self.query.find_by_id(product_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                error!("❌ Product not found with ID: {product_id}");
                return Err(ServiceError::Custom("Product not found".to_string()));
            }
            Err(e) => {
                error!("❌ Database error while finding product ID {product_id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        }

        // Two independent reads against current data; nothing is cached and
        // no snapshot spans them.
        let average_rating = self
            .query
            .average_rating(product_id)
            .await
            .map_err(ServiceError::Repo)?
            .unwrap_or(0.0);

        let total_ordered = self
            .query
            .total_ordered(product_id)
            .await
            .map_err(ServiceError::Repo)?
            .unwrap_or(0);

        let score = weighted_score(average_rating, total_ordered);

        info!("✅ Product {product_id} weighted score: {score}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Weighted score computed successfully".to_string(),
            data: ProductScoreResponse {
                id: product_id,
                weighted_score: score,
            },
        })
    }

    async fn find_trending(
        &self,
        limit: i64,
    ) -> Result<ApiResponse<Vec<TrendingProductResponse>>, ServiceError> {
        let limit = if limit > 0 { limit } else { 10 };

        info!("📈 Finding top {limit} trending products");

        let products = self.query.find_trending(limit).await.map_err(|e| {
            error!("❌ Failed to fetch trending products: {e:?}");
            ServiceError::Repo(e)
        })?;

        let data: Vec<TrendingProductResponse> = products
            .into_iter()
            .map(TrendingProductResponse::from)
            .collect();

        info!("✅ Found {} trending products", data.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Trending products retrieved successfully".to_string(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::repository::ProductQueryRepositoryTrait,
        model::{Product as ProductModel, TrendingProduct},
    };
    use rust_decimal::Decimal;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct StubQueryRepository {
        product: Option<ProductModel>,
        average_rating: Option<f64>,
        total_ordered: Option<i64>,
    }

    fn sample_product() -> ProductModel {
        ProductModel {
            product_id: 7,
            category_id: 1,
            name: "Intro to Go".to_string(),
            slug: "intro-to-go".to_string(),
            description: String::new(),
            price: Decimal::new(1999, 2),
            available: true,
            stock: 3,
            image: None,
            thumbnail: None,
            author: "Author_Name".to_string(),
            publisher: "Publisher_Name".to_string(),
            isbn_no: "isbn_no".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for StubQueryRepository {
        async fn find_all(
            &self,
            _req: &FindAllProducts,
        ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
            Ok((self.product.clone().into_iter().collect(), 1))
        }

        async fn find_by_category_slug(
            &self,
            _slug: &str,
            _req: &FindAllProducts,
        ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
            Ok((self.product.clone().into_iter().collect(), 1))
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<ProductModel>, RepositoryError> {
            Ok(self.product.clone())
        }

        async fn average_rating(
            &self,
            _product_id: i32,
        ) -> Result<Option<f64>, RepositoryError> {
            Ok(self.average_rating)
        }

        async fn total_ordered(&self, _product_id: i32) -> Result<Option<i64>, RepositoryError> {
            Ok(self.total_ordered)
        }

        async fn find_trending(
            &self,
            _limit: i64,
        ) -> Result<Vec<TrendingProduct>, RepositoryError> {
            Ok(vec![TrendingProduct {
                product_id: 7,
                name: "Intro to Go".to_string(),
                slug: "intro-to-go".to_string(),
                weighted_score: 6.15,
            }])
        }
    }

    fn service(stub: StubQueryRepository) -> ProductQueryService {
        ProductQueryService::new(Arc::new(stub))
    }

    #[tokio::test]
    async fn weighted_score_is_zero_without_ratings_or_orders() {
        let svc = service(StubQueryRepository {
            product: Some(sample_product()),
            average_rating: None,
            total_ordered: None,
        });

        let response = svc.weighted_score(7).await.unwrap();

        assert_eq!(response.data.weighted_score, 0.0);
    }

    #[tokio::test]
    async fn weighted_score_combines_average_and_orders() {
        // ratings [4, 5] average to 4.5, ten units ordered
        let svc = service(StubQueryRepository {
            product: Some(sample_product()),
            average_rating: Some(4.5),
            total_ordered: Some(10),
        });

        let response = svc.weighted_score(7).await.unwrap();

        assert!((response.data.weighted_score - 6.15).abs() < 1e-9);
    }

    #[tokio::test]
    async fn weighted_score_of_missing_product_is_an_error() {
        let svc = service(StubQueryRepository {
            product: None,
            average_rating: None,
            total_ordered: None,
        });

        let err = svc.weighted_score(42).await.unwrap_err();

        assert!(matches!(err, ServiceError::Custom(msg) if msg == "Product not found"));
    }

    #[tokio::test]
    async fn find_by_id_builds_detail_url() {
        let svc = service(StubQueryRepository {
            product: Some(sample_product()),
            average_rating: None,
            total_ordered: None,
        });

        let response = svc.find_by_id(7).await.unwrap();

        assert!(response.data.url.contains('7'));
        assert!(response.data.url.contains("intro-to-go"));
    }

    #[tokio::test]
    async fn trending_is_ranked_by_the_storage_layer() {
        let svc = service(StubQueryRepository {
            product: None,
            average_rating: None,
            total_ordered: None,
        });

        let response = svc.find_trending(10).await.unwrap();

        assert_eq!(response.data.len(), 1);
        assert!((response.data[0].weighted_score - 6.15).abs() < 1e-9);
    }
}
