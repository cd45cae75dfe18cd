use crate::errors::ServiceError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;

    #[test]
    fn service_error_serializes_with_error_status() {
        let err = ServiceError::Repo(RepositoryError::NotFound);
        let response = ErrorResponse::from(&err);

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "error");
        assert!(value["message"].as_str().unwrap().contains("Not found"));
    }
}
