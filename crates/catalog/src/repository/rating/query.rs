use crate::{
    abstract_trait::rating::repository::RatingQueryRepositoryTrait,
    domain::requests::FindAllRatings, model::Rating as RatingModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct RatingQueryRepository {
    db: ConnectionPool,
}

impl RatingQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct RatingCountRow {
    #[sqlx(flatten)]
    rating: RatingModel,
    total_count: i64,
}

#[async_trait]
impl RatingQueryRepositoryTrait for RatingQueryRepository {
    async fn find_by_product(
        &self,
        product_id: i32,
        req: &FindAllRatings,
    ) -> Result<(Vec<RatingModel>, i64), RepositoryError> {
        info!("🔍 Fetching ratings for product ID: {product_id}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as i64;

        let rows = sqlx::query_as::<_, RatingCountRow>(
            r#"
            SELECT
                r.rating_id,
                r.user_id,
                r.product_id,
                r.rating,
                r.created_at,
                r.updated_at,
                COUNT(*) OVER() AS total_count
            FROM ratings r
            WHERE r.product_id = $1
            ORDER BY r.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(product_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to fetch ratings for product {product_id}: {:?}",
                e
            );
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let ratings = rows.into_iter().map(|r| r.rating).collect();

        Ok((ratings, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<RatingModel>, RepositoryError> {
        info!("🆔 Fetching rating by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, RatingModel>(
            r#"
            SELECT rating_id, user_id, product_id, rating, created_at, updated_at
            FROM ratings
            WHERE rating_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
