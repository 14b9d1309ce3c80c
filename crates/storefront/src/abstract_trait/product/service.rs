use crate::{
    abstract_trait::storage::FileUpload,
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        response::ProductResponse,
    },
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::Method};
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    /// Creates a product; an uploaded image replaces `req.imagen`.
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image: Option<FileUpload>,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
        image: Option<FileUpload>,
        method: Method,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<(), ServiceError>;
}
