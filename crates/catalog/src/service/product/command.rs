use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest, validation_messages},
        response::{ApiResponse, ProductResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("📝 Creating product '{}'", req.name);

        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let product = self.command.create_product(req).await.map_err(|e| {
            error!("❌ Failed to create product '{}': {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Updating product ID {}", req.id);

        req.validate()
            .map_err(|e| ServiceError::Validation(validation_messages(&e)))?;

        let product = self.command.update_product(req).await.map_err(|e| {
            error!("❌ Failed to update product ID {}: {e:?}", req.id);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product ID {id}");

        self.command.delete_product(id).await.map_err(|e| {
            error!("❌ Failed to delete product ID {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::repository::ProductCommandRepositoryTrait,
        model::Product as ProductModel,
    };
    use rust_decimal::Decimal;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct StubCommandRepository;

    #[async_trait]
    impl ProductCommandRepositoryTrait for StubCommandRepository {
        async fn create_product(
            &self,
            req: &CreateProductRequest,
        ) -> Result<ProductModel, RepositoryError> {
            Ok(ProductModel {
                product_id: 7,
                category_id: req.category_id,
                name: req.name.clone(),
                slug: req.slug.clone(),
                description: req.description.clone(),
                price: req.price,
                available: req.available,
                stock: req.stock,
                image: req.image.clone(),
                thumbnail: req.thumbnail.clone(),
                author: req.author.clone(),
                publisher: req.publisher.clone(),
                isbn_no: req.isbn_no.clone(),
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_product(
            &self,
            _req: &UpdateProductRequest,
        ) -> Result<ProductModel, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete_product(&self, _id: i32) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn base_request() -> CreateProductRequest {
        CreateProductRequest {
            category_id: 1,
            name: "Intro to Go".to_string(),
            slug: "intro-to-go".to_string(),
            description: String::new(),
            price: Decimal::new(1999, 2),
            available: true,
            stock: 12,
            image: None,
            thumbnail: None,
            author: "Author_Name".to_string(),
            publisher: "Publisher_Name".to_string(),
            isbn_no: "isbn_no".to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_detail_url_with_id_and_slug() {
        let svc = ProductCommandService::new(Arc::new(StubCommandRepository));

        let response = svc.create_product(&base_request()).await.unwrap();

        assert_eq!(response.data.url, "/products/7/intro-to-go/");
    }

    #[tokio::test]
    async fn negative_stock_is_rejected_before_the_repository() {
        let svc = ProductCommandService::new(Arc::new(StubCommandRepository));
        let mut req = base_request();
        req.stock = -3;

        let err = svc.create_product(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
