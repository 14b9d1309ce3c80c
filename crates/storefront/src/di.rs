use crate::{
    abstract_trait::storage::DynFileStorage,
    repository::{CategoryRepository, OrderLineRepository, OrderRepository, ProductRepository},
    service::{CategoryService, OrderLineService, OrderService, ProductService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::fmt;

/// Repository bundles for every resource.
#[derive(Clone)]
pub struct Repositories {
    pub category: CategoryRepository,
    pub product: ProductRepository,
    pub order: OrderRepository,
    pub order_line: OrderLineRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            category: CategoryRepository::new(pool.clone()),
            product: ProductRepository::new(pool.clone()),
            order: OrderRepository::new(pool.clone()),
            order_line: OrderLineRepository::new(pool),
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub category_service: CategoryService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    pub order_line_service: OrderLineService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("category_service", &self.category_service)
            .field("product_service", &self.product_service)
            .field("order_service", &self.order_service)
            .field("order_line_service", &self.order_line_service)
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(
        repositories: &Repositories,
        storage: DynFileStorage,
        registry: &mut Registry,
    ) -> Self {
        let category_service = CategoryService::new(&repositories.category, registry);

        let product_service = ProductService::new(
            &repositories.product,
            &repositories.category,
            storage,
            registry,
        );

        let order_service =
            OrderService::new(&repositories.order, &repositories.order_line, registry);

        let order_line_service = OrderLineService::new(
            &repositories.order_line,
            &repositories.order,
            &repositories.product,
            registry,
        );

        Self {
            category_service,
            product_service,
            order_service,
            order_line_service,
        }
    }
}
