use crate::{
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        response::ProductResponse,
    },
    middleware::ProductForm,
    service::ProductService,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    errors::{ErrorResponse, HttpError},
    utils::Method,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/productos/",
    tag = "Producto",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Products, optionally of one category", body = Vec<ProductResponse>),
        (status = 400, description = "Malformed filter", body = ErrorResponse)
    )
)]
pub async fn list_products(
    Extension(service): Extension<ProductService>,
    params: Result<Query<FindAllProducts>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(params) = params.map_err(|e| HttpError::BadRequest(e.body_text()))?;
    let response = service.query.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/productos/{id}/",
    tag = "Producto",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/productos/",
    tag = "Producto",
    request_body(
        content = CreateProductRequest,
        description = "JSON, or multipart/form-data with the image as an `imagen` file part"
    ),
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<ProductService>,
    form: ProductForm,
) -> Result<impl IntoResponse, HttpError> {
    let body = form.fields.into_complete()?;
    let response = service.command.create_product(&body, form.image).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/productos/{id}/",
    tag = "Producto",
    params(("id" = i32, Path, description = "Product ID")),
    request_body(
        content = CreateProductRequest,
        description = "JSON, or multipart/form-data with the image as an `imagen` file part"
    ),
    responses(
        (status = 200, description = "Product replaced", body = ProductResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<i32>,
    form: ProductForm,
) -> Result<impl IntoResponse, HttpError> {
    let body = form.fields.into_complete()?;
    let request = UpdateProductRequest::replace(id, body);
    let response = service
        .command
        .update_product(&request, form.image, Method::Put)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/productos/{id}/",
    tag = "Producto",
    params(("id" = i32, Path, description = "Product ID")),
    request_body(
        content = UpdateProductRequest,
        description = "JSON, or multipart/form-data with the image as an `imagen` file part"
    ),
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn patch_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<i32>,
    form: ProductForm,
) -> Result<impl IntoResponse, HttpError> {
    let mut request = form.fields;
    request.id = Some(id);
    let response = service
        .command
        .update_product(&request, form.image, Method::Patch)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/productos/{id}/",
    tag = "Producto",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.command.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/productos/", get(list_products).post(create_product))
        .route(
            "/api/productos/{id}/",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_service.clone()))
}
