use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (
                category_id, name, slug, description, price, available, stock,
                image, thumbnail, author, publisher, isbn_no,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    current_timestamp, current_timestamp)
            RETURNING product_id, category_id, name, slug, description, price,
                      available, stock, image, thumbnail, author, publisher,
                      isbn_no, created_at, updated_at
            "#,
        )
        .bind(product.category_id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.stock)
        .bind(&product.image)
        .bind(&product.thumbnail)
        .bind(&product.author)
        .bind(&product.publisher)
        .bind(&product.isbn_no)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product '{}': {:?}", product.name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} ('{}')",
            result.product_id, result.name
        );
        Ok(result)
    }

    async fn update_product(
        &self,
        product: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET category_id = $2,
                name = $3,
                slug = $4,
                description = $5,
                price = $6,
                available = $7,
                stock = $8,
                image = $9,
                thumbnail = $10,
                author = $11,
                publisher = $12,
                isbn_no = $13,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING product_id, category_id, name, slug, description, price,
                      available, stock, image, thumbnail, author, publisher,
                      isbn_no, created_at, updated_at
            "#,
        )
        .bind(product.id)
        .bind(product.category_id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.stock)
        .bind(&product.image)
        .bind(&product.thumbnail)
        .bind(&product.author)
        .bind(&product.publisher)
        .bind(&product.isbn_no)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", product.id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated product ID {}", result.product_id);
        Ok(result)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Ratings and order items go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {id}: {:?}", err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product ID {id}");
        Ok(())
    }
}
