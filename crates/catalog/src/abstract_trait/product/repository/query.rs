use crate::{
    domain::requests::FindAllProducts,
    model::{Product as ProductModel, TrendingProduct},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_by_category_slug(
        &self,
        slug: &str,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;

    /// Mean of all rating rows for the product, `None` when unrated.
    async fn average_rating(&self, product_id: i32) -> Result<Option<f64>, RepositoryError>;

    /// Sum of ordered quantities for the product, `None` when never ordered.
    async fn total_ordered(&self, product_id: i32) -> Result<Option<i64>, RepositoryError>;

    async fn find_trending(&self, limit: i64) -> Result<Vec<TrendingProduct>, RepositoryError>;
}
