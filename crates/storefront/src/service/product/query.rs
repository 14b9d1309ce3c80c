use crate::{
    abstract_trait::product::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{requests::FindAllProducts, response::ProductResponse},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationObserver},
};
use tracing::{error, info};

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    observer: OperationObserver,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            observer: OperationObserver::new("product-query-service", registry),
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Finding products | Category: {:?}", req.categoria);

        let method = Method::Get;
        let tracing_ctx = self.observer.start_tracing(
            "product_find_all",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new(
                    "categoria",
                    req.categoria.map(|id| id.to_string()).unwrap_or_default(),
                ),
            ],
        );

        match self.query.find_all(req).await {
            Ok(products) => {
                info!("✅ Retrieved {} products", products.len());
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Products retrieved successfully",
                );
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(e) => {
                let msg = format!("Failed to fetch products: {e:?}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.observer.start_tracing(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Product retrieved successfully",
                );
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, "Product not found");
                Err(ServiceError::NotFound(format!("Product {id}")))
            }
            Err(e) => {
                let msg = format!("Failed to fetch product {id}: {e:?}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
