use crate::{
    domain::{
        requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
        response::OrderLineResponse,
    },
    middleware::SimpleValidatedJson,
    service::OrderLineService,
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
    path = "/api/detalles/",
    tag = "Detalle",
    responses(
        (status = 200, description = "All order lines", body = Vec<OrderLineResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_order_lines(
    Extension(service): Extension<OrderLineService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/detalles/{id}/",
    tag = "Detalle",
    params(("id" = i32, Path, description = "Order line ID")),
    responses(
        (status = 200, description = "Order line details", body = OrderLineResponse),
        (status = 404, description = "Order line not found", body = ErrorResponse)
    )
)]
pub async fn get_order_line(
    Extension(service): Extension<OrderLineService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/detalles/",
    tag = "Detalle",
    request_body = CreateOrderLineRequest,
    responses(
        (status = 201, description = "Order line created", body = OrderLineResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_order_line(
    Extension(service): Extension<OrderLineService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderLineRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_order_line(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/detalles/{id}/",
    tag = "Detalle",
    params(("id" = i32, Path, description = "Order line ID")),
    request_body = CreateOrderLineRequest,
    responses(
        (status = 200, description = "Order line replaced", body = OrderLineResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Order line not found", body = ErrorResponse)
    )
)]
pub async fn update_order_line(
    Extension(service): Extension<OrderLineService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderLineRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let request = UpdateOrderLineRequest::replace(id, body);
    let response = service.command.update_order_line(&request, Method::Put).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/detalles/{id}/",
    tag = "Detalle",
    params(("id" = i32, Path, description = "Order line ID")),
    request_body = UpdateOrderLineRequest,
    responses(
        (status = 200, description = "Order line updated", body = OrderLineResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Order line not found", body = ErrorResponse)
    )
)]
pub async fn patch_order_line(
    Extension(service): Extension<OrderLineService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateOrderLineRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);
    let response = service.command.update_order_line(&body, Method::Patch).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/detalles/{id}/",
    tag = "Detalle",
    params(("id" = i32, Path, description = "Order line ID")),
    responses(
        (status = 204, description = "Order line deleted"),
        (status = 404, description = "Order line not found", body = ErrorResponse)
    )
)]
pub async fn delete_order_line(
    Extension(service): Extension<OrderLineService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.command.delete_order_line(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_line_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/detalles/",
            get(list_order_lines).post(create_order_line),
        )
        .route(
            "/api/detalles/{id}/",
            get(get_order_line)
                .put(update_order_line)
                .patch(patch_order_line)
                .delete(delete_order_line),
        )
        .layer(Extension(app_state.di_container.order_line_service.clone()))
}
