use crate::{
    abstract_trait::category::{
        repository::DynCategoryCommandRepository, service::CategoryCommandServiceTrait,
    },
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest, validation_messages},
        response::{ApiResponse, CategoryResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct CategoryCommandService {
    pub command: DynCategoryCommandRepository,
}

impl CategoryCommandService {
    pub fn new(command: DynCategoryCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("📝 Creating category '{}'", req.name);

        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let category = self.command.create_category(req).await.map_err(|e| {
            error!("❌ Failed to create category '{}': {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category created successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🔄 Updating category ID {}", req.id);

        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let category = self.command.update_category(req).await.map_err(|e| {
            error!("❌ Failed to update category ID {}: {e:?}", req.id);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category updated successfully".to_string(),
            data: CategoryResponse::from(category),
        })
    }

    async fn delete_category(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting category ID {id}");

        self.command.delete_category(id).await.map_err(|e| {
            error!("❌ Failed to delete category ID {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Category deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::category::repository::CategoryCommandRepositoryTrait,
        model::Category as CategoryModel,
    };
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct StubCommandRepository {
        duplicate_slug: bool,
    }

    #[async_trait]
    impl CategoryCommandRepositoryTrait for StubCommandRepository {
        async fn create_category(
            &self,
            req: &CreateCategoryRequest,
        ) -> Result<CategoryModel, RepositoryError> {
            if self.duplicate_slug {
                return Err(RepositoryError::AlreadyExists(format!(
                    "slug '{}' already exists",
                    req.slug
                )));
            }

            Ok(CategoryModel {
                category_id: 1,
                name: req.name.clone(),
                slug: req.slug.clone(),
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_category(
            &self,
            req: &UpdateCategoryRequest,
        ) -> Result<CategoryModel, RepositoryError> {
            Ok(CategoryModel {
                category_id: req.id,
                name: req.name.clone(),
                slug: req.slug.clone(),
                created_at: None,
                updated_at: None,
            })
        }

        async fn delete_category(&self, _id: i32) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn service(duplicate_slug: bool) -> CategoryCommandService {
        CategoryCommandService::new(Arc::new(StubCommandRepository { duplicate_slug }))
    }

    #[tokio::test]
    async fn create_returns_url_built_from_slug() {
        let req = CreateCategoryRequest {
            name: "Programming".to_string(),
            slug: "programming".to_string(),
        };

        let response = service(false).create_category(&req).await.unwrap();

        assert_eq!(response.data.url, "/products/category/programming/");
    }

    #[tokio::test]
    async fn duplicate_slug_surfaces_already_exists() {
        let req = CreateCategoryRequest {
            name: "Programming".to_string(),
            slug: "programming".to_string(),
        };

        let err = service(true).create_category(&req).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn empty_name_fails_validation_before_repository() {
        let req = CreateCategoryRequest {
            name: String::new(),
            slug: "programming".to_string(),
        };

        let err = service(false).create_category(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
