use crate::{
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;
pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError>;
    async fn find_by_name(&self, nombre: &str) -> Result<Option<CategoryModel>, RepositoryError>;
}

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError>;
    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError>;
    /// Removes the category together with its products and their order lines.
    async fn delete_category(&self, id: i32) -> Result<(), RepositoryError>;
}
