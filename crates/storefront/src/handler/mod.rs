mod category;
mod order;
mod order_line;
mod product;

use crate::{
    domain::{
        requests::{
            CreateCategoryRequest, CreateOrderLineRequest, CreateOrderRequest,
            CreateProductRequest, UpdateCategoryRequest, UpdateOrderLineRequest,
            UpdateOrderRequest, UpdateProductRequest,
        },
        response::{CategoryResponse, OrderLineResponse, OrderResponse, ProductResponse},
    },
    model::OrderStatus,
    state::AppState,
};
use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{errors::ErrorResponse, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::category::category_routes;
pub use self::order::order_routes;
pub use self::order_line::order_line_routes;
pub use self::product::product_routes;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        category::list_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::patch_category,
        category::delete_category,

        product::list_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::patch_product,
        product::delete_product,

        order::list_orders,
        order::get_order,
        order::create_order,
        order::update_order,
        order::patch_order,
        order::delete_order,

        order_line::list_order_lines,
        order_line::get_order_line,
        order_line::create_order_line,
        order_line::update_order_line,
        order_line::patch_order_line,
        order_line::delete_order_line,
    ),
    components(schemas(
        CategoryResponse,
        ProductResponse,
        OrderResponse,
        OrderLineResponse,
        OrderStatus,
        CreateCategoryRequest,
        UpdateCategoryRequest,
        CreateProductRequest,
        UpdateProductRequest,
        CreateOrderRequest,
        UpdateOrderRequest,
        CreateOrderLineRequest,
        UpdateOrderLineRequest,
        ErrorResponse,
    )),
    tags(
        (name = "Categoria", description = "Product categories"),
        (name = "Producto", description = "Catalog products"),
        (name = "Pedido", description = "Customer orders"),
        (name = "Detalle", description = "Order lines"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        error!("❌ Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let media = app_state.media.clone();
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(order_line_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        let mut app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        // Only a site-relative MEDIA_URL is served from here.
        let mount = media.url.trim_end_matches('/');
        if mount.starts_with('/') && mount.len() > 1 {
            app = app.nest_service(mount, ServeDir::new(&media.root));
        }

        app.layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("👋 Server stopped");
        Ok(())
    }
}
