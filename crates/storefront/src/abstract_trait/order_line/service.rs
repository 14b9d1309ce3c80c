use crate::domain::{
    requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
    response::OrderLineResponse,
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::Method};
use std::sync::Arc;

pub type DynOrderLineQueryService = Arc<dyn OrderLineQueryServiceTrait + Send + Sync>;
pub type DynOrderLineCommandService = Arc<dyn OrderLineCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderLineQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<OrderLineResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<OrderLineResponse, ServiceError>;
}

#[async_trait]
pub trait OrderLineCommandServiceTrait {
    async fn create_order_line(
        &self,
        req: &CreateOrderLineRequest,
    ) -> Result<OrderLineResponse, ServiceError>;
    async fn update_order_line(
        &self,
        req: &UpdateOrderLineRequest,
        method: Method,
    ) -> Result<OrderLineResponse, ServiceError>;
    async fn delete_order_line(&self, id: i32) -> Result<(), ServiceError>;
}
