use crate::{
    domain::requests::{CreateRatingRequest, UpdateRatingRequest},
    model::Rating as RatingModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynRatingCommandRepository = Arc<dyn RatingCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RatingCommandRepositoryTrait {
    async fn create_rating(&self, req: &CreateRatingRequest)
    -> Result<RatingModel, RepositoryError>;
    async fn update_rating(&self, req: &UpdateRatingRequest)
    -> Result<RatingModel, RepositoryError>;
    async fn delete_rating(&self, id: i32) -> Result<(), RepositoryError>;
}
