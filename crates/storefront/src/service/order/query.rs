use super::assemble_orders;
use crate::{
    abstract_trait::{
        order::{DynOrderQueryRepository, OrderQueryServiceTrait},
        order_line::DynOrderLineQueryRepository,
    },
    domain::response::OrderResponse,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationObserver},
};
use tracing::{error, info};

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    lines: DynOrderLineQueryRepository,
    observer: OperationObserver,
}

impl OrderQueryService {
    pub fn new(
        query: DynOrderQueryRepository,
        lines: DynOrderLineQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            lines,
            observer: OperationObserver::new("order-query-service", registry),
        }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.observer.start_tracing(
            "order_find_all",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let result = async {
            let orders = self.query.find_all().await?;
            let ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
            let lines = self.lines.find_by_order_ids(&ids).await?;
            assemble_orders(orders, lines)
        }
        .await;

        match result {
            Ok(orders) => {
                info!("✅ Retrieved {} orders", orders.len());
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Orders retrieved successfully",
                );
                Ok(orders)
            }
            Err(e) => {
                let msg = format!("Failed to fetch orders: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<OrderResponse, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.observer.start_tracing(
            "order_find_by_id",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        let result = async {
            let order = self
                .query
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::NotFound(format!("Order {id}")))?;
            let lines = self.lines.find_by_order_ids(&[id]).await?;
            assemble_orders(vec![order], lines)
        }
        .await;

        match result.map(|mut orders| orders.pop()) {
            Ok(Some(order)) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order retrieved successfully",
                );
                Ok(order)
            }
            Ok(None) => {
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, "Order not found");
                Err(ServiceError::NotFound(format!("Order {id}")))
            }
            Err(e) => {
                let msg = format!("Failed to fetch order {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }
}
