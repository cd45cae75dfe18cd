use crate::{
    abstract_trait::category::repository::CategoryCommandRepositoryTrait,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(
        &self,
        category: &CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (name, slug, created_at, updated_at)
            VALUES ($1, $2, current_timestamp, current_timestamp)
            RETURNING category_id, name, slug, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category '{}': {:?}", category.name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created category ID {} ('{}')",
            result.category_id, result.name
        );
        Ok(result)
    }

    async fn update_category(
        &self,
        category: &UpdateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categories
            SET name = $2,
                slug = $3,
                updated_at = current_timestamp
            WHERE category_id = $1
            RETURNING category_id, name, slug, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category ID {}: {:?}", category.id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated category ID {}", result.category_id);
        Ok(result)
    }

    async fn delete_category(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Products and their ratings/order items go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete category ID {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted category ID {id}");
        Ok(())
    }
}
