use crate::{
    abstract_trait::order_line::{DynOrderLineQueryRepository, OrderLineQueryServiceTrait},
    domain::response::OrderLineResponse,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationObserver},
};
use tracing::{error, info};

pub struct OrderLineQueryService {
    query: DynOrderLineQueryRepository,
    observer: OperationObserver,
}

impl OrderLineQueryService {
    pub fn new(query: DynOrderLineQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            observer: OperationObserver::new("order-line-query-service", registry),
        }
    }
}

#[async_trait]
impl OrderLineQueryServiceTrait for OrderLineQueryService {
    async fn find_all(&self) -> Result<Vec<OrderLineResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.observer.start_tracing(
            "order_line_find_all",
            vec![
                KeyValue::new("component", "order_line"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        match self.query.find_all().await {
            Ok(lines) => {
                info!("✅ Retrieved {} order lines", lines.len());
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order lines retrieved successfully",
                );
                Ok(lines.into_iter().map(OrderLineResponse::from).collect())
            }
            Err(e) => {
                let msg = format!("Failed to fetch order lines: {e:?}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<OrderLineResponse, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.observer.start_tracing(
            "order_line_find_by_id",
            vec![
                KeyValue::new("component", "order_line"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("order_line.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(line)) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order line retrieved successfully",
                );
                Ok(OrderLineResponse::from(line))
            }
            Ok(None) => {
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, "Order line not found");
                Err(ServiceError::NotFound(format!("Order line {id}")))
            }
            Err(e) => {
                let msg = format!("Failed to fetch order line {id}: {e:?}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
