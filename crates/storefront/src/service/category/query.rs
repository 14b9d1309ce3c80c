use crate::{
    abstract_trait::category::{CategoryQueryServiceTrait, DynCategoryQueryRepository},
    domain::response::CategoryResponse,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationObserver},
};
use tracing::{error, info};

pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
    observer: OperationObserver,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            observer: OperationObserver::new("category-query-service", registry),
        }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(&self) -> Result<Vec<CategoryResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.observer.start_tracing(
            "category_find_all",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        match self.query.find_all().await {
            Ok(categories) => {
                info!("✅ Retrieved {} categories", categories.len());
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Categories retrieved successfully",
                );
                Ok(categories.into_iter().map(CategoryResponse::from).collect())
            }
            Err(e) => {
                let msg = format!("Failed to fetch categories: {e:?}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<CategoryResponse, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.observer.start_tracing(
            "category_find_by_id",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(category)) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Category retrieved successfully",
                );
                Ok(CategoryResponse::from(category))
            }
            Ok(None) => {
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, "Category not found");
                Err(ServiceError::NotFound(format!("Category {id}")))
            }
            Err(e) => {
                let msg = format!("Failed to fetch category {id}: {e:?}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
