use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        response::OrderResponse,
    },
    middleware::SimpleValidatedJson,
    service::OrderService,
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
    path = "/api/pedidos/",
    tag = "Pedido",
    responses(
        (status = 200, description = "Orders with their lines", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_orders(
    Extension(service): Extension<OrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/pedidos/{id}/",
    tag = "Pedido",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its lines", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<OrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/pedidos/",
    tag = "Pedido",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<OrderService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.command.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/pedidos/{id}/",
    tag = "Pedido",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order replaced", body = OrderResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn update_order(
    Extension(service): Extension<OrderService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let request = UpdateOrderRequest::replace(id, body);
    let response = service.command.update_order(&request, Method::Put).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/pedidos/{id}/",
    tag = "Pedido",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn patch_order(
    Extension(service): Extension<OrderService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);
    let response = service.command.update_order(&body, Method::Patch).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/pedidos/{id}/",
    tag = "Pedido",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order and its lines deleted"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<OrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.command.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/pedidos/", get(list_orders).post(create_order))
        .route(
            "/api/pedidos/{id}/",
            get(get_order)
                .put(update_order)
                .patch(patch_order)
                .delete(delete_order),
        )
        .layer(Extension(app_state.di_container.order_service.clone()))
}
