use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pagination::Pagination;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponsePagination<T> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_response_serializes_flat() {
        let response = ApiResponse {
            status: "success".to_string(),
            message: "ok".to_string(),
            data: vec![1, 2, 3],
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({ "status": "success", "message": "ok", "data": [1, 2, 3] })
        );
    }

    #[test]
    fn paginated_response_nests_pagination() {
        let response = ApiResponsePagination {
            status: "success".to_string(),
            message: "ok".to_string(),
            data: Vec::<i32>::new(),
            pagination: Pagination {
                page: 1,
                page_size: 10,
                total_items: 0,
                total_pages: 1,
            },
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["pagination"]["total_pages"], 1);
    }
}
