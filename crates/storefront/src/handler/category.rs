use crate::{
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        response::CategoryResponse,
    },
    middleware::SimpleValidatedJson,
    service::CategoryService,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
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
    path = "/api/categorias/",
    tag = "Categoria",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_categories(
    Extension(service): Extension<CategoryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categorias/{id}/",
    tag = "Categoria",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn get_category(
    Extension(service): Extension<CategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/categorias/",
    tag = "Categoria",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse)
    )
)]
pub async fn create_category(
    Extension(service): Extension<CategoryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categorias/{id}/",
    tag = "Categoria",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category replaced", body = CategoryResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse)
    )
)]
pub async fn update_category(
    Extension(service): Extension<CategoryService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let request = UpdateCategoryRequest::replace(id, body);
    let response = service.command.update_category(&request, Method::Put).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/categorias/{id}/",
    tag = "Categoria",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Name already in use", body = ErrorResponse)
    )
)]
pub async fn patch_category(
    Extension(service): Extension<CategoryService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);
    let response = service.command.update_category(&body, Method::Patch).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/categorias/{id}/",
    tag = "Categoria",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category and its products deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn delete_category(
    Extension(service): Extension<CategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.command.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/categorias/",
            get(list_categories).post(create_category),
        )
        .route(
            "/api/categorias/{id}/",
            get(get_category)
                .put(update_category)
                .patch(patch_category)
                .delete(delete_category),
        )
        .layer(Extension(app_state.di_container.category_service.clone()))
}
