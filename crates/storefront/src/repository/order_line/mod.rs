mod command;
mod query;

use self::command::OrderLineCommandRepository;
use self::query::OrderLineQueryRepository;

use crate::abstract_trait::order_line::{DynOrderLineCommandRepository, DynOrderLineQueryRepository};
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderLineRepository {
    pub query: DynOrderLineQueryRepository,
    pub command: DynOrderLineCommandRepository,
}

impl OrderLineRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(OrderLineQueryRepository::new(pool.clone())) as DynOrderLineQueryRepository;

        let command =
            Arc::new(OrderLineCommandRepository::new(pool.clone())) as DynOrderLineCommandRepository;

        Self { query, command }
    }
}
