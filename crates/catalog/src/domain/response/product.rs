use crate::model::{Product as ProductModel, TrendingProduct};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub available: bool,
    pub stock: i32,
    pub url: String,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub author: String,
    pub publisher: String,
    pub isbn_no: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        let url = value.absolute_url();

        ProductResponse {
            id: value.product_id,
            category_id: value.category_id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            price: value.price,
            available: value.available,
            stock: value.stock,
            url,
            image: value.image,
            thumbnail: value.thumbnail,
            author: value.author,
            publisher: value.publisher,
            isbn_no: value.isbn_no,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

/// Weighted score of a single product, recomputed per request.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductScoreResponse {
    pub id: i32,
    pub weighted_score: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TrendingProductResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub weighted_score: f64,
}

impl From<TrendingProduct> for TrendingProductResponse {
    fn from(value: TrendingProduct) -> Self {
        TrendingProductResponse {
            id: value.product_id,
            name: value.name,
            slug: value.slug,
            weighted_score: value.weighted_score,
        }
    }
}
