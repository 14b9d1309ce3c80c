mod command;
mod query;

use self::command::OrderCommandService;
use self::query::OrderQueryService;
use crate::{
    abstract_trait::order::{DynOrderCommandService, DynOrderQueryService},
    domain::response::{OrderLineResponse, OrderResponse},
    model::{Order as OrderModel, OrderLineWithProduct},
    repository::{OrderLineRepository, OrderRepository},
};
use prometheus_client::registry::Registry;
use shared::errors::ServiceError;
use std::{collections::HashMap, fmt, sync::Arc};

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

impl OrderService {
    pub fn new(
        repository: &OrderRepository,
        lines: &OrderLineRepository,
        registry: &mut Registry,
    ) -> Self {
        let query = Arc::new(OrderQueryService::new(
            repository.query.clone(),
            lines.query.clone(),
            registry,
        )) as DynOrderQueryService;

        let command = Arc::new(OrderCommandService::new(
            repository.command.clone(),
            lines.query.clone(),
            registry,
        )) as DynOrderCommandService;

        Self { query, command }
    }
}

/// Attaches each order's lines, keeping the order of both inputs.
fn assemble_orders(
    orders: Vec<OrderModel>,
    lines: Vec<OrderLineWithProduct>,
) -> Result<Vec<OrderResponse>, ServiceError> {
    let mut by_order: HashMap<i32, Vec<OrderLineResponse>> = HashMap::new();
    for line in lines {
        by_order
            .entry(line.pedido_id)
            .or_default()
            .push(OrderLineResponse::from(line));
    }

    orders
        .into_iter()
        .map(|order| {
            let detalles = by_order.remove(&order.id).unwrap_or_default();
            OrderResponse::from_parts(order, detalles)
        })
        .collect()
}
