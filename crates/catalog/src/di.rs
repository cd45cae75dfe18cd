use crate::{
    repository::{
        category::{CategoryCommandRepository, CategoryQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
        rating::{RatingCommandRepository, RatingQueryRepository},
    },
    service::{
        category::{CategoryCommandService, CategoryQueryService},
        product::{ProductCommandService, ProductQueryService},
        rating::{RatingCommandService, RatingQueryService},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

/// Wires every repository and service from one explicit connection pool.
/// Nothing in the catalog reaches for ambient database state.
#[derive(Clone)]
pub struct DependenciesInject {
    pub category_query: CategoryQueryService,
    pub category_command: CategoryCommandService,
    pub product_query: ProductQueryService,
    pub product_command: ProductCommandService,
    pub rating_query: RatingQueryService,
    pub rating_command: RatingCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("category_query", &"CategoryQueryService")
            .field("category_command", &"CategoryCommandService")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("rating_query", &"RatingQueryService")
            .field("rating_command", &"RatingCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let category_query_repo = Arc::new(CategoryQueryRepository::new(pool.clone()));
        let category_command_repo = Arc::new(CategoryCommandRepository::new(pool.clone()));
        let product_query_repo = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo = Arc::new(ProductCommandRepository::new(pool.clone()));
        let rating_query_repo = Arc::new(RatingQueryRepository::new(pool.clone()));
        let rating_command_repo = Arc::new(RatingCommandRepository::new(pool));

        Self {
            category_query: CategoryQueryService::new(category_query_repo),
            category_command: CategoryCommandService::new(category_command_repo),
            product_query: ProductQueryService::new(product_query_repo),
            product_command: ProductCommandService::new(product_command_repo),
            rating_query: RatingQueryService::new(rating_query_repo),
            rating_command: RatingCommandService::new(rating_command_repo),
        }
    }
}
