use crate::domain::{
    requests::{CreateCategoryRequest, UpdateCategoryRequest},
    response::CategoryResponse,
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::Method};
use std::sync::Arc;

pub type DynCategoryQueryService = Arc<dyn CategoryQueryServiceTrait + Send + Sync>;
pub type DynCategoryCommandService = Arc<dyn CategoryCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<CategoryResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<CategoryResponse, ServiceError>;
}

#[async_trait]
pub trait CategoryCommandServiceTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError>;
    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
        method: Method,
    ) -> Result<CategoryResponse, ServiceError>;
    async fn delete_category(&self, id: i32) -> Result<(), ServiceError>;
}
