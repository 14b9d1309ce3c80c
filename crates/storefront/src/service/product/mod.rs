mod command;
mod query;

use self::command::ProductCommandService;
use self::query::ProductQueryService;
use crate::{
    abstract_trait::{
        product::{DynProductCommandService, DynProductQueryService},
        storage::DynFileStorage,
    },
    repository::{CategoryRepository, ProductRepository},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

impl fmt::Debug for ProductService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductService")
            .field("query", &"Arc<dyn ProductQueryServiceTrait>")
            .field("command", &"Arc<dyn ProductCommandServiceTrait>")
            .finish()
    }
}

impl ProductService {
    pub fn new(
        repository: &ProductRepository,
        categories: &CategoryRepository,
        storage: DynFileStorage,
        registry: &mut Registry,
    ) -> Self {
        let query = Arc::new(ProductQueryService::new(repository.query.clone(), registry))
            as DynProductQueryService;

        let command = Arc::new(ProductCommandService::new(
            repository.query.clone(),
            repository.command.clone(),
            categories.query.clone(),
            storage,
            registry,
        )) as DynProductCommandService;

        Self { query, command }
    }
}
