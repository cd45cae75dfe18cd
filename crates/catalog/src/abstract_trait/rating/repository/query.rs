use crate::{domain::requests::FindAllRatings, model::Rating as RatingModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynRatingQueryRepository = Arc<dyn RatingQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RatingQueryRepositoryTrait {
    async fn find_by_product(
        &self,
        product_id: i32,
        req: &FindAllRatings,
    ) -> Result<(Vec<RatingModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<RatingModel>, RepositoryError>;
}
