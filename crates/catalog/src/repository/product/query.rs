use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    domain::requests::FindAllProducts,
    model::{ORDERS_WEIGHT, Product as ProductModel, RATING_WEIGHT, TrendingProduct},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::{error, info};

const PRODUCT_COLUMNS: &str = r#"
    p.product_id,
    p.category_id,
    p.name,
    p.slug,
    p.description,
    p.price,
    p.available,
    p.stock,
    p.image,
    p.thumbnail,
    p.author,
    p.publisher,
    p.isbn_no,
    p.created_at,
    p.updated_at
"#;

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct ProductCountRow {
    #[sqlx(flatten)]
    product: ProductModel,
    total_count: i64,
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Fetching all products with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as i64;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}, COUNT(*) OVER() AS total_count
            FROM products p
            WHERE ($1::TEXT IS NULL OR p.name ILIKE '%' || $1 || '%')
            ORDER BY p.name
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, ProductCountRow>(&sql)
            .bind(search_pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(|r| r.product).collect();

        Ok((products, total))
    }

    async fn find_by_category_slug(
        &self,
        slug: &str,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Fetching products for category slug: {slug}");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as i64;

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}, COUNT(*) OVER() AS total_count
            FROM products p
            JOIN categories c ON c.category_id = p.category_id
            WHERE c.slug = $1
            ORDER BY p.name
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, ProductCountRow>(&sql)
            .bind(slug)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products for category '{slug}': {:?}", e);
                RepositoryError::from(e)
            })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let products = rows.into_iter().map(|r| r.product).collect();

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            WHERE p.product_id = $1
            "#
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn average_rating(&self, product_id: i32) -> Result<Option<f64>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let average = sqlx::query_scalar::<_, Option<f64>>(
            r#"
            SELECT AVG(rating)::DOUBLE PRECISION
            FROM ratings
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to aggregate ratings for product {product_id}: {:?}",
                e
            );
            RepositoryError::from(e)
        })?;

        Ok(average)
    }

    async fn total_ordered(&self, product_id: i32) -> Result<Option<i64>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let total = sqlx::query_scalar::<_, Option<i64>>(
            r#"
            SELECT SUM(quantity)::BIGINT
            FROM order_items
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to aggregate order items for product {product_id}: {:?}",
                e
            );
            RepositoryError::from(e)
        })?;

        Ok(total)
    }

    async fn find_trending(&self, limit: i64) -> Result<Vec<TrendingProduct>, RepositoryError> {
        info!("📈 Fetching top {limit} trending products");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Aggregates are computed in subqueries so ratings and order items
        // do not cross-multiply before averaging.
        let rows = sqlx::query_as::<_, TrendingProduct>(
            r#"
            SELECT
                p.product_id,
                p.name,
                p.slug,
                ($2::DOUBLE PRECISION * COALESCE(r.avg_rating, 0)
                    + $3::DOUBLE PRECISION * COALESCE(o.total_qty, 0))::DOUBLE PRECISION
                    AS weighted_score
            FROM products p
            LEFT JOIN (
                SELECT product_id, AVG(rating)::DOUBLE PRECISION AS avg_rating
                FROM ratings
                GROUP BY product_id
            ) r ON r.product_id = p.product_id
            LEFT JOIN (
                SELECT product_id, SUM(quantity)::BIGINT AS total_qty
                FROM order_items
                GROUP BY product_id
            ) o ON o.product_id = p.product_id
            ORDER BY weighted_score DESC, p.name
            LIMIT $1
            "#,
        )
        .bind(limit)
        .bind(RATING_WEIGHT)
        .bind(ORDERS_WEIGHT)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch trending products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }
}
