use crate::{
    abstract_trait::{
        category::DynCategoryQueryRepository,
        product::{
            DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
        },
        storage::{DynFileStorage, FileUpload},
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest, to_money},
        response::ProductResponse,
    },
    model::ProductWithCategory,
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

const IMAGE_FOLDER: &str = "productos";

pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    categories: DynCategoryQueryRepository,
    storage: DynFileStorage,
    observer: OperationObserver,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        categories: DynCategoryQueryRepository,
        storage: DynFileStorage,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            command,
            categories,
            storage,
            observer: OperationObserver::new("product-command-service", registry),
        }
    }

    async fn ensure_category_exists(&self, categoria: i32) -> Result<(), ServiceError> {
        if self.categories.find_by_id(categoria).await?.is_none() {
            return Err(ServiceError::invalid_field(
                "categoria",
                format!("Invalid pk \"{categoria}\" - object does not exist."),
            ));
        }
        Ok(())
    }

    async fn store_image(&self, image: Option<FileUpload>) -> Result<Option<String>, ServiceError> {
        match image {
            Some(upload) => {
                let url = self.storage.store(IMAGE_FOLDER, &upload).await?;
                info!("🖼️ Stored product image {} at {url}", upload.file_name);
                Ok(Some(url))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        image: Option<FileUpload>,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product: {}", req.nombre);

        let method = Method::Post;
        let tracing_ctx = self.observer.start_tracing(
            "product_create",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.nombre", req.nombre.clone()),
                KeyValue::new("product.categoria", req.categoria.to_string()),
            ],
        );

        let result: Result<ProductWithCategory, ServiceError> = async {
            req.validate()?;
            self.ensure_category_exists(req.categoria).await?;

            let mut body = req.clone();
            body.precio = to_money(&req.precio);
            if let Some(url) = self.store_image(image).await? {
                body.imagen = Some(url);
            }

            Ok(self.command.create_product(&body).await?)
        }
        .await;

        match result {
            Ok(product) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Product created successfully",
                );
                Ok(ProductResponse::from(product))
            }
            Err(e) => {
                let msg = format!("Failed to create product: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
        image: Option<FileUpload>,
        method: Method,
    ) -> Result<ProductResponse, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Product id is required".into()))?;

        info!("🔄 Updating product ID: {id}");

        let tracing_ctx = self.observer.start_tracing(
            "product_update",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "update"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let result: Result<ProductWithCategory, ServiceError> = async {
            req.validate()?;
            if let Some(categoria) = req.categoria {
                self.ensure_category_exists(categoria).await?;
            }

            let mut body = req.clone();
            body.precio = req.precio.as_ref().map(to_money);

            if image.is_some() {
                // Missing products must not leave an orphaned upload behind.
                if self.query.find_by_id(id).await?.is_none() {
                    return Err(ServiceError::NotFound(format!("Product {id}")));
                }
                body.imagen = self.store_image(image).await?;
            }

            self.command
                .update_product(&body)
                .await
                .map_err(|e| map_repo_error(e, "Product", id))
        }
        .await;

        match result {
            Ok(product) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Product updated successfully",
                );
                Ok(ProductResponse::from(product))
            }
            Err(e) => {
                let msg = format!("Failed to update product {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(e)
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = self.observer.start_tracing(
            "product_delete",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.command.delete_product(id).await {
            Ok(()) => {
                self.observer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    "Product deleted successfully",
                );
                Ok(())
            }
            Err(e) => {
                let msg = format!("Failed to delete product {id}: {e}");
                error!("❌ {msg}");
                self.observer
                    .complete_tracing_error(&tracing_ctx, method, &msg);
                Err(map_repo_error(e, "Product", id))
            }
        }
    }
}
