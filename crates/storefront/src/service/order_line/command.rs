use crate::{
    abstract_trait::{
        order::DynOrderQueryRepository,
        order_line::{
            DynOrderLineCommandRepository, DynOrderLineQueryRepository,
            OrderLineCommandServiceTrait,
        },
        product::DynProductQueryRepository,
    },
    domain::{
        requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
        response::OrderLineResponse,
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

pub struct OrderLineCommandService {
    query: DynOrderLineQueryRepository,
    command: DynOrderLineCommandRepository,
    orders: DynOrderQueryRepository,
    products: DynProductQueryRepository,
    observer: OperationObserver,
}

impl OrderLineCommandService {
    pub fn new(
        query: DynOrderLineQueryRepository,
        command: DynOrderLineCommandRepository,
        orders: DynOrderQueryRepository,
        products: DynProductQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            command,
            orders,
            products,
            observer: OperationObserver::new("order-line-command-service", registry),
        }
    }

    async fn ensure_references_exist(
        &self,
        pedido: Option<i32>,
        producto: Option<i32>,
    ) -> Result<(), ServiceError> {
        if let Some(pedido) = pedido {
            if self.orders.find_by_id(pedido).await?.is_none() {
                return Err(ServiceError::invalid_field(
                    "pedido",
                    format!("Invalid pk \"{pedido}\" - object does not exist."),
                ));
            }
        }

        if let Some(producto) = producto {
            if self.products.find_by_id(producto).await?.is_none() {
                return Err(ServiceError::invalid_field(
                    "producto",
                    format!("Invalid pk \"{producto}\" - object does not exist."),
                ));
            }
        }

        Ok(())
    }

    /// Reloads a written line together with its product.
    async fn load(&self, id: i32) -> Result<OrderLineResponse, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .map(OrderLineResponse::from)
            .ok_or_else(|| ServiceError::NotFound(format!("Order line {id}")))
    }
}

#[async_trait]
impl OrderLineCommandServiceTrait for OrderLineCommandService {
    async fn create_order_line(
        &self,
        req: &CreateOrderLineRequest,
    ) -> Result<OrderLineResponse, ServiceError> {
        info!(
            "🏗️ Adding product {} x{} to order {}",
            req.producto, req.cantidad, req.pedido
        );

        let method = Method::Post;
        let tracing_ctx = self.observer.start_tracing(
            "order_line_create",
            vec![
                KeyValue::new("component", "order_line"),
                KeyValue::new("operation", "create"),
                KeyValue::new("order_line.pedido", req.pedido.to_string()),
                KeyValue::new("order_line.producto", req.producto.to_string()),
            ],
        );

        let result = async {
            req.validate()?;
            self.ensure_references_exist(Some(req.pedido), Some(req.producto))
                .await?;

            let line = self.command.create_order_line(req).await?;
            self.load(line.id).await
        }
        .await;

        match result {
            Ok(line) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order line created successfully",
                );
                Ok(line)
            }
            Err(e) => {
                let msg = format!("Failed to create order line: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn update_order_line(
        &self,
        req: &UpdateOrderLineRequest,
        method: Method,
    ) -> Result<OrderLineResponse, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Order line id is required".into()))?;

        info!("🔄 Updating order line ID: {id}");

        let tracing_ctx = self.observer.start_tracing(
            "order_line_update",
            vec![
                KeyValue::new("component", "order_line"),
                KeyValue::new("operation", "update"),
                KeyValue::new("order_line.id", id.to_string()),
            ],
        );

        let result = async {
            req.validate()?;
            self.ensure_references_exist(req.pedido, req.producto)
                .await?;

            let line = self
                .command
                .update_order_line(req)
                .await
                .map_err(|e| map_repo_error(e, "Order line", id))?;
            self.load(line.id).await
        }
        .await;

        match result {
            Ok(line) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order line updated successfully",
                );
                Ok(line)
            }
            Err(e) => {
                let msg = format!("Failed to update order line {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn delete_order_line(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting order line ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = self.observer.start_tracing(
            "order_line_delete",
            vec![
                KeyValue::new("component", "order_line"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("order_line.id", id.to_string()),
            ],
        );

        match self.command.delete_order_line(id).await {
            Ok(()) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Order line deleted successfully",
                );
                Ok(())
            }
            Err(e) => {
                let msg = format!("Failed to delete order line {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(map_repo_error(e, "Order line", id))
            }
        }
    }
}
