use crate::{
    abstract_trait::{
        order::{DynOrderCommandRepository, OrderCommandServiceTrait},
        order_line::DynOrderLineQueryRepository,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest, to_money},
        response::{OrderLineResponse, OrderResponse},
    },
    service::map_repo_error,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationObserver},
};
use tracing::{error, info};
use validator::Validate;

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    lines: DynOrderLineQueryRepository,
    observer: OperationObserver,
}

impl OrderCommandService {
    pub fn new(
        command: DynOrderCommandRepository,
        lines: DynOrderLineQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            command,
            lines,
            observer: OperationObserver::new("order-command-service", registry),
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError> {
        info!("🏗️ Creating order for: {}", req.nombre_cliente);

        let method = Method::Post;
        let tracing_ctx = self.observer.start_tracing(
            "order_create",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "create"),
                KeyValue::new("order.nombre_cliente", req.nombre_cliente.clone()),
            ],
        );

        let result = async {
            req.validate()?;

            let mut body = req.clone();
            body.total = to_money(&req.total);

            let order = self.command.create_order(&body).await?;
            OrderResponse::from_parts(order, Vec::new())
        }
        .await;

        match result {
            Ok(order) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order created successfully",
                );
                Ok(order)
            }
            Err(e) => {
                let msg = format!("Failed to create order: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn update_order(
        &self,
        req: &UpdateOrderRequest,
        method: Method,
    ) -> Result<OrderResponse, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Order id is required".into()))?;

        info!("🔄 Updating order ID: {id}");

        let tracing_ctx = self.observer.start_tracing(
            "order_update",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "update"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        let result = async {
            req.validate()?;

            let mut body = req.clone();
            body.total = req.total.as_ref().map(to_money);

            let order = self
                .command
                .update_order(&body)
                .await
                .map_err(|e| map_repo_error(e, "Order", id))?;

            let detalles = self
                .lines
                .find_by_order_ids(&[id])
                .await?
                .into_iter()
                .map(OrderLineResponse::from)
                .collect();

            OrderResponse::from_parts(order, detalles)
        }
        .await;

        match result {
            Ok(order) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order updated successfully",
                );
                Ok(order)
            }
            Err(e) => {
                let msg = format!("Failed to update order {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn delete_order(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting order ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = self.observer.start_tracing(
            "order_delete",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        match self.command.delete_order(id).await {
            Ok(()) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order deleted successfully",
                );
                Ok(())
            }
            Err(e) => {
                let msg = format!("Failed to delete order {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(map_repo_error(e, "Order", id))
            }
        }
    }
}
