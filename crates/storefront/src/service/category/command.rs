use crate::{
    abstract_trait::category::{
        CategoryCommandServiceTrait, DynCategoryCommandRepository, DynCategoryQueryRepository,
    },
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        response::CategoryResponse,
    },
    model::Category as CategoryModel,
    service::map_repo_error,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, OperationObserver},
};
use tracing::{error, info, warn};
use validator::Validate;

pub struct CategoryCommandService {
    query: DynCategoryQueryRepository,
    command: DynCategoryCommandRepository,
    observer: OperationObserver,
}

impl CategoryCommandService {
    pub fn new(
        query: DynCategoryQueryRepository,
        command: DynCategoryCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            command,
            observer: OperationObserver::new("category-command-service", registry),
        }
    }

    /// Rejects a name already used by a category other than `current`.
    async fn ensure_unique_name(
        &self,
        nombre: &str,
        current: Option<i32>,
    ) -> Result<(), ServiceError> {
        match self.query.find_by_name(nombre).await? {
            Some(existing) if Some(existing.id) != current => {
                warn!("⚠️ Category name already taken: {nombre}");
                Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                    "category with nombre '{nombre}'"
                ))))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        info!("🏗️ Creating category: {}", req.nombre);

        let method = Method::Post;
        let tracing_ctx = self.observer.start_tracing(
            "category_create",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "create"),
                KeyValue::new("category.nombre", req.nombre.clone()),
            ],
        );

        let result: Result<CategoryModel, ServiceError> = async {
            req.validate()?;
            self.ensure_unique_name(&req.nombre, None).await?;
            Ok(self.command.create_category(req).await?)
        }
        .await;

        match result {
            Ok(category) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Category created successfully",
                );
                Ok(CategoryResponse::from(category))
            }
            Err(e) => {
                let msg = format!("Failed to create category: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
        method: Method,
    ) -> Result<CategoryResponse, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Category id is required".into()))?;

        info!("🔄 Updating category ID: {id}");

        let tracing_ctx = self.observer.start_tracing(
            "category_update",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "update"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        let result: Result<CategoryModel, ServiceError> = async {
            req.validate()?;
            if let Some(nombre) = req.nombre.as_deref() {
                self.ensure_unique_name(nombre, Some(id)).await?;
            }
            self.command
                .update_category(req)
                .await
                .map_err(|e| map_repo_error(e, "Category", id))
        }
        .await;

        match result {
            Ok(category) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Category updated successfully",
                );
                Ok(CategoryResponse::from(category))
            }
            Err(e) => {
                let msg = format!("Failed to update category {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn delete_category(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting category ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = self.observer.start_tracing(
            "category_delete",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        match self.command.delete_category(id).await {
            Ok(()) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Category deleted successfully",
                );
                Ok(())
            }
            Err(e) => {
                let msg = format!("Failed to delete category {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(map_repo_error(e, "Category", id))
            }
        }
    }
}
