use crate::domain::{
    requests::{CreateOrderRequest, UpdateOrderRequest},
    response::OrderResponse,
};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::Method};
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<OrderResponse, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError>;
    /// `method` tells a full replacement (PUT) from a partial one (PATCH).
    async fn update_order(
        &self,
        req: &UpdateOrderRequest,
        method: Method,
    ) -> Result<OrderResponse, ServiceError>;
    async fn delete_order(&self, id: i32) -> Result<(), ServiceError>;
}
