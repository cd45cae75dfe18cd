use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Binds one user to one product with a score in [0, 5]. Nothing prevents
/// the same user from rating a product more than once; every row counts in
/// the product's average.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub rating_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
