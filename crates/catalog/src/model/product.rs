use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Weight of the average rating in the weighted score.
pub const RATING_WEIGHT: f64 = 0.7;
/// Weight of the total ordered quantity in the weighted score.
pub const ORDERS_WEIGHT: f64 = 0.3;

/// Directory for main product images, bucketed by upload date.
pub fn image_upload_dir(date: NaiveDate) -> String {
    format!("products/{}", date.format("%Y/%m/%d"))
}

/// Directory for product thumbnails.
pub const THUMBNAIL_UPLOAD_DIR: &str = "products/thumbnails";

/// Combines the two aggregates into the ranking value. Recomputed on every
/// read; the caller supplies both terms from current data.
pub fn weighted_score(average_rating: f64, total_ordered: i64) -> f64 {
    RATING_WEIGHT * average_rating + ORDERS_WEIGHT * total_ordered as f64
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    pub stock: i32,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub author: String,
    pub publisher: String,
    pub isbn_no: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    /// Path of the detail view, built from the numeric id and the slug.
    pub fn absolute_url(&self) -> String {
        format!("/products/{}/{}/", self.product_id, self.slug)
    }
}

/// One row of the query-level trending ranking.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrendingProduct {
    pub product_id: i32,
    pub name: String,
    pub slug: String,
    pub weighted_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            product_id: 7,
            category_id: 1,
            name: "Intro to Go".to_string(),
            slug: "intro-to-go".to_string(),
            description: String::new(),
            price: Decimal::new(1999, 2),
            available: true,
            stock: 3,
            image: None,
            thumbnail: None,
            author: "Author_Name".to_string(),
            publisher: "Publisher_Name".to_string(),
            isbn_no: "isbn_no".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn absolute_url_contains_id_and_slug() {
        let url = sample_product().absolute_url();

        assert_eq!(url, "/products/7/intro-to-go/");
        assert!(url.contains('7'));
        assert!(url.contains("intro-to-go"));
    }

    #[test]
    fn weighted_score_is_zero_without_data() {
        assert_eq!(weighted_score(0.0, 0), 0.0);
    }

    #[test]
    fn weighted_score_combines_both_terms() {
        // ratings [4, 5] average 4.5, ten units ordered
        let score = weighted_score(4.5, 10);
        assert!((score - 6.15).abs() < 1e-9);
    }

    #[test]
    fn image_upload_dir_is_bucketed_by_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(image_upload_dir(date), "products/2025/03/09");
        assert_eq!(THUMBNAIL_UPLOAD_DIR, "products/thumbnails");
    }
}
