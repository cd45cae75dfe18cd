mod api;
mod category;
mod pagination;
mod product;
mod rating;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::category::CategoryResponse;
pub use self::pagination::Pagination;
pub use self::product::{ProductResponse, ProductScoreResponse, TrendingProductResponse};
pub use self::rating::RatingResponse;
