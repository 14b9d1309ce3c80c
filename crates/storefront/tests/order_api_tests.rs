mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn create_order_defaults_to_pending_without_lines() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/pedidos/",
            json!({ "nombre_cliente": "Ana", "telefono": "5512345678", "total": 120 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["estado"], "pendiente");
    assert_eq!(body["total"], "120.00");
    assert_eq!(body["detalles"], json!([]));
    assert!(body["fecha_creacion"].is_string());

    let id = body["id"].as_i64().unwrap();
    let (status, fetched) = app.get(&format!("/api/pedidos/{id}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn order_includes_its_lines_with_embedded_products() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let producto = app.product("Café", "35.50", categoria).await;
    let pedido = app.order("Ana", "71.00").await;

    let (status, line) = app
        .post(
            "/api/detalles/",
            json!({ "pedido": pedido, "producto": producto, "cantidad": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{line}");
    assert_eq!(line["pedido"], pedido);
    assert_eq!(line["producto"]["nombre"], "Café");

    let (status, order) = app.get(&format!("/api/pedidos/{pedido}/")).await;
    assert_eq!(status, StatusCode::OK);

    let detalles = order["detalles"].as_array().unwrap();
    assert_eq!(detalles.len(), 1);
    assert_eq!(detalles[0]["cantidad"], 2);
    assert_eq!(
        detalles[0]["producto"],
        json!({
            "id": producto,
            "nombre": "Café",
            "descripcion": "Café de la casa",
            "precio": "35.50",
            "imagen": null,
            "categoria": { "id": categoria, "nombre": "Bebidas" },
        })
    );

    let (_, list) = app.get("/api/pedidos/").await;
    assert_eq!(list[0]["detalles"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn status_accepts_any_allowed_value_in_any_order() {
    let app = TestApp::new();
    let id = app.order("Luis", "50.00").await;

    for estado in ["pagado", "pendiente", "terminado", "en_proceso"] {
        let (status, body) = app
            .patch(&format!("/api/pedidos/{id}/"), json!({ "estado": estado }))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["estado"], estado);
    }

    let (status, body) = app
        .patch(&format!("/api/pedidos/{id}/"), json!({ "estado": "cancelado" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["estado"].is_array(), "{body}");
}

#[tokio::test]
async fn fractional_json_total_is_kept_exactly() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/pedidos/",
            json!({ "nombre_cliente": "Ana", "telefono": "5512345678", "total": 19.99 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["total"], "19.99");
}

#[tokio::test]
async fn missing_order_fields_are_reported_by_name() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/pedidos/", json!({ "nombre_cliente": "Ana", "total": "10.00" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["telefono"], json!(["This field is required."]));
}

#[tokio::test]
async fn put_without_status_keeps_the_stored_one() {
    let app = TestApp::new();
    let id = app.order("Luis", "50.00").await;
    app.patch(&format!("/api/pedidos/{id}/"), json!({ "estado": "pagado" }))
        .await;

    let (status, body) = app
        .put(
            &format!("/api/pedidos/{id}/"),
            json!({ "nombre_cliente": "Luis M.", "telefono": "5500000000", "total": "55.5" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre_cliente"], "Luis M.");
    assert_eq!(body["total"], "55.50");
    assert_eq!(body["estado"], "pagado");
}

#[tokio::test]
async fn order_fields_are_validated() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/pedidos/",
            json!({ "nombre_cliente": "", "telefono": "123456789012345678901", "total": "1.005" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    for field in ["nombre_cliente", "telefono", "total"] {
        assert!(body["errors"][field].is_array(), "{field}");
    }
}

#[tokio::test]
async fn deleting_an_order_deletes_its_lines() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let producto = app.product("Café", "35.50", categoria).await;
    let pedido = app.order("Ana", "35.50").await;
    app.post(
        "/api/detalles/",
        json!({ "pedido": pedido, "producto": producto, "cantidad": 1 }),
    )
    .await;
    assert_eq!(app.store.line_count(), 1);

    let (status, _) = app.delete(&format!("/api/pedidos/{pedido}/")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(app.store.line_count(), 0);

    let (status, _) = app.get(&format!("/api/pedidos/{pedido}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_product_removes_it_from_orders() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let producto = app.product("Café", "35.50", categoria).await;
    let pedido = app.order("Ana", "35.50").await;
    app.post(
        "/api/detalles/",
        json!({ "pedido": pedido, "producto": producto, "cantidad": 1 }),
    )
    .await;

    app.delete(&format!("/api/productos/{producto}/")).await;

    let (_, order) = app.get(&format!("/api/pedidos/{pedido}/")).await;
    assert_eq!(order["detalles"], json!([]));
}

#[tokio::test]
async fn order_line_references_must_exist() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let producto = app.product("Café", "35.50", categoria).await;
    let pedido = app.order("Ana", "35.50").await;

    let (status, body) = app
        .post(
            "/api/detalles/",
            json!({ "pedido": 999, "producto": producto, "cantidad": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["pedido"].is_array());

    let (status, body) = app
        .post(
            "/api/detalles/",
            json!({ "pedido": pedido, "producto": 999, "cantidad": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["producto"].is_array());

    let (status, body) = app
        .post(
            "/api/detalles/",
            json!({ "pedido": pedido, "producto": producto, "cantidad": 0 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["cantidad"].is_array());

    assert_eq!(app.store.line_count(), 0);
}

#[tokio::test]
async fn order_line_can_be_updated_and_deleted() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let cafe = app.product("Café", "35.50", categoria).await;
    let te = app.product("Té", "20.00", categoria).await;
    let pedido = app.order("Ana", "35.50").await;

    let (_, line) = app
        .post(
            "/api/detalles/",
            json!({ "pedido": pedido, "producto": cafe, "cantidad": 1 }),
        )
        .await;
    let id = line["id"].as_i64().unwrap();

    let (status, body) = app
        .patch(&format!("/api/detalles/{id}/"), json!({ "cantidad": 3 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cantidad"], 3);
    assert_eq!(body["producto"]["id"], cafe);

    let (status, body) = app
        .put(
            &format!("/api/detalles/{id}/"),
            json!({ "pedido": pedido, "producto": te, "cantidad": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["producto"]["nombre"], "Té");

    let (_, all) = app.get("/api/detalles/").await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (status, _) = app.delete(&format!("/api/detalles/{id}/")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/detalles/{id}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_and_docs_are_exposed() {
    let app = TestApp::new();
    app.category("Bebidas").await;

    let (status, body) = app.get("/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let text = body.as_str().unwrap();
    assert!(text.contains("category_command_service_requests_total"));

    let (status, doc) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/pedidos/{id}/"].is_object());
}
