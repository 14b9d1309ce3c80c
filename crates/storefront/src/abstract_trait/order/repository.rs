use crate::{
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    model::Order as OrderModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError>;
    async fn update_order(&self, req: &UpdateOrderRequest) -> Result<OrderModel, RepositoryError>;
    /// Removes the order together with its lines.
    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError>;
}
