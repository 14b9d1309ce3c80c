use crate::{
    domain::requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
    model::{OrderLine as OrderLineModel, OrderLineWithProduct},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderLineQueryRepository = Arc<dyn OrderLineQueryRepositoryTrait + Send + Sync>;
pub type DynOrderLineCommandRepository = Arc<dyn OrderLineCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderLineQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<OrderLineWithProduct>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderLineWithProduct>, RepositoryError>;
    async fn find_by_order_ids(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderLineWithProduct>, RepositoryError>;
}

#[async_trait]
pub trait OrderLineCommandRepositoryTrait {
    async fn create_order_line(
        &self,
        req: &CreateOrderLineRequest,
    ) -> Result<OrderLineModel, RepositoryError>;
    async fn update_order_line(
        &self,
        req: &UpdateOrderLineRequest,
    ) -> Result<OrderLineModel, RepositoryError>;
    async fn delete_order_line(&self, id: i32) -> Result<(), RepositoryError>;
}
