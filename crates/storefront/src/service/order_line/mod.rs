mod command;
mod query;

use self::command::OrderLineCommandService;
use self::query::OrderLineQueryService;
use crate::{
    abstract_trait::order_line::{DynOrderLineCommandService, DynOrderLineQueryService},
    repository::{OrderLineRepository, OrderRepository, ProductRepository},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct OrderLineService {
    pub query: DynOrderLineQueryService,
    pub command: DynOrderLineCommandService,
}

impl fmt::Debug for OrderLineService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderLineService")
            .field("query", &"Arc<dyn OrderLineQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderLineCommandServiceTrait>")
            .finish()
    }
}

impl OrderLineService {
    pub fn new(
        repository: &OrderLineRepository,
        orders: &OrderRepository,
        products: &ProductRepository,
        registry: &mut Registry,
    ) -> Self {
        let query = Arc::new(OrderLineQueryService::new(
            repository.query.clone(),
            registry,
        )) as DynOrderLineQueryService;

        let command = Arc::new(OrderLineCommandService::new(
            repository.query.clone(),
            repository.command.clone(),
            orders.query.clone(),
            products.query.clone(),
            registry,
        )) as DynOrderLineCommandService;

        Self { query, command }
    }
}
