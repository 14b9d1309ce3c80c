mod command;
mod query;

use self::command::CategoryCommandService;
use self::query::CategoryQueryService;
use crate::{
    abstract_trait::category::{DynCategoryCommandService, DynCategoryQueryService},
    repository::CategoryRepository,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct CategoryService {
    pub query: DynCategoryQueryService,
    pub command: DynCategoryCommandService,
}

impl fmt::Debug for CategoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryService")
            .field("query", &"Arc<dyn CategoryQueryServiceTrait>")
            .field("command", &"Arc<dyn CategoryCommandServiceTrait>")
            .finish()
    }
}

impl CategoryService {
    pub fn new(repository: &CategoryRepository, registry: &mut Registry) -> Self {
        let query = Arc::new(CategoryQueryService::new(
            repository.query.clone(),
            registry,
        )) as DynCategoryQueryService;

        let command = Arc::new(CategoryCommandService::new(
            repository.query.clone(),
            repository.command.clone(),
            registry,
        )) as DynCategoryCommandService;

        Self { query, command }
    }
}
