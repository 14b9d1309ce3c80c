use crate::{
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    model::ProductWithCategory,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductWithCategory>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithCategory>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductWithCategory, RepositoryError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductWithCategory, RepositoryError>;
    /// Removes the product together with the order lines referencing it.
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
}
