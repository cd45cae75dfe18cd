mod category;
mod product;
mod rating;

pub use self::category::Category;
pub use self::product::{
    ORDERS_WEIGHT, Product, RATING_WEIGHT, THUMBNAIL_UPLOAD_DIR, TrendingProduct,
    image_upload_dir, weighted_score,
};
pub use self::rating::Rating;
