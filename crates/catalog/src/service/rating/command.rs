use crate::{
    abstract_trait::rating::{
        repository::DynRatingCommandRepository, service::RatingCommandServiceTrait,
    },
    domain::{
        requests::{CreateRatingRequest, UpdateRatingRequest, validation_messages},
        response::{ApiResponse, RatingResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct RatingCommandService {
    pub command: DynRatingCommandRepository,
}

impl RatingCommandService {
    pub fn new(command: DynRatingCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl RatingCommandServiceTrait for RatingCommandService {
    async fn create_rating(
        &self,
        req: &CreateRatingRequest,
    ) -> Result<ApiResponse<RatingResponse>, ServiceError> {
        info!(
            "📝 User {} rating product {} with {}",
            req.user_id, req.product_id, req.rating
        );

        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let rating = self.command.create_rating(req).await.map_err(|e| {
            error!(
                "❌ Failed to create rating for product {}: {e:?}",
                req.product_id
            );
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Rating created successfully".to_string(),
            data: RatingResponse::from(rating),
        })
    }

    async fn update_rating(
        &self,
        req: &UpdateRatingRequest,
    ) -> Result<ApiResponse<RatingResponse>, ServiceError> {
        info!("🔄 Updating rating ID {}", req.id);

        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let rating = self.command.update_rating(req).await.map_err(|e| {
            error!("❌ Failed to update rating ID {}: {e:?}", req.id);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Rating updated successfully".to_string(),
            data: RatingResponse::from(rating),
        })
    }

    async fn delete_rating(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting rating ID {id}");

        self.command.delete_rating(id).await.map_err(|e| {
            error!("❌ Failed to delete rating ID {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Rating deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::rating::repository::RatingCommandRepositoryTrait,
        model::Rating as RatingModel,
    };
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct StubCommandRepository;

    #[async_trait]
    impl RatingCommandRepositoryTrait for StubCommandRepository {
        async fn create_rating(
            &self,
            req: &CreateRatingRequest,
        ) -> Result<RatingModel, RepositoryError> {
            Ok(RatingModel {
                rating_id: 1,
                user_id: req.user_id,
                product_id: req.product_id,
                rating: req.rating,
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_rating(
            &self,
            req: &UpdateRatingRequest,
        ) -> Result<RatingModel, RepositoryError> {
            Ok(RatingModel {
                rating_id: req.id,
                user_id: 1,
                product_id: 1,
                rating: req.rating,
                created_at: None,
                updated_at: None,
            })
        }

        async fn delete_rating(&self, _id: i32) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn service() -> RatingCommandService {
        RatingCommandService::new(Arc::new(StubCommandRepository))
    }

    fn request_with_rating(rating: i32) -> CreateRatingRequest {
        CreateRatingRequest {
            user_id: 1,
            product_id: 7,
            rating,
        }
    }

    #[tokio::test]
    async fn boundary_ratings_are_accepted() {
        for rating in [0, 5] {
            let response = service()
                .create_rating(&request_with_rating(rating))
                .await
                .unwrap();

            assert_eq!(response.data.rating, rating);
        }
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected() {
        for rating in [-1, 6] {
            let err = service()
                .create_rating(&request_with_rating(rating))
                .await
                .unwrap_err();

            assert!(matches!(err, ServiceError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn same_user_may_rate_a_product_twice() {
        let svc = service();
        let req = request_with_rating(4);

        let first = svc.create_rating(&req).await;
        let second = svc.create_rating(&req).await;

        assert!(first.is_ok());
        assert!(second.is_ok());
    }
}
