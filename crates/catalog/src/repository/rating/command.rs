use crate::{
    abstract_trait::rating::repository::RatingCommandRepositoryTrait,
    domain::requests::{CreateRatingRequest, UpdateRatingRequest},
    model::Rating as RatingModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct RatingCommandRepository {
    db: ConnectionPool,
}

impl RatingCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingCommandRepositoryTrait for RatingCommandRepository {
    async fn create_rating(
        &self,
        rating: &CreateRatingRequest,
    ) -> Result<RatingModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, RatingModel>(
            r#"
            INSERT INTO ratings (user_id, product_id, rating, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING rating_id, user_id, product_id, rating, created_at, updated_at
            "#,
        )
        .bind(rating.user_id)
        .bind(rating.product_id)
        .bind(rating.rating)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create rating for product {}: {:?}",
                rating.product_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ User {} rated product {} with {}",
            result.user_id, result.product_id, result.rating
        );
        Ok(result)
    }

    async fn update_rating(
        &self,
        rating: &UpdateRatingRequest,
    ) -> Result<RatingModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, RatingModel>(
            r#"
            UPDATE ratings
            SET rating = $2,
                updated_at = current_timestamp
            WHERE rating_id = $1
            RETURNING rating_id, user_id, product_id, rating, created_at, updated_at
            "#,
        )
        .bind(rating.id)
        .bind(rating.rating)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update rating ID {}: {:?}", rating.id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated rating ID {}", result.rating_id);
        Ok(result)
    }

    async fn delete_rating(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM ratings WHERE rating_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete rating ID {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted rating ID {id}");
        Ok(())
    }
}
