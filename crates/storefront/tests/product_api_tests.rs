mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use common::TestApp;
use serde_json::json;

const BOUNDARY: &str = "storefront-test-boundary";

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"imagen\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(method: &str, uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn product_embeds_its_category() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;

    let (status, created) = app
        .post(
            "/api/productos/",
            json!({
                "nombre": "Café de olla",
                "descripcion": "Con canela",
                "precio": "35.5",
                "categoria": categoria,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = app.get(&format!("/api/productos/{id}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched,
        json!({
            "id": id,
            "nombre": "Café de olla",
            "descripcion": "Con canela",
            "precio": "35.50",
            "imagen": null,
            "categoria": { "id": categoria, "nombre": "Bebidas" },
        })
    );
}

#[tokio::test]
async fn description_defaults_to_empty() {
    let app = TestApp::new();
    let categoria = app.category("Pan").await;

    let (status, body) = app
        .post(
            "/api/productos/",
            json!({ "nombre": "Concha", "precio": "12", "categoria": categoria }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["descripcion"], "");
    assert_eq!(body["precio"], "12.00");
}

#[tokio::test]
async fn filter_by_category() {
    let app = TestApp::new();
    let bebidas = app.category("Bebidas").await;
    let postres = app.category("Postres").await;
    let vacia = app.category("Vacía").await;
    let cafe = app.product("Café", "35.50", bebidas).await;
    app.product("Flan", "40.00", postres).await;

    let (status, body) = app.get(&format!("/api/productos/?categoria={bebidas}")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], cafe);

    let (_, body) = app.get(&format!("/api/productos/?categoria={vacia}")).await;
    assert_eq!(body, json!([]));

    let (_, body) = app.get("/api/productos/?categoria=999").await;
    assert_eq!(body, json!([]));

    let (_, body) = app.get("/api/productos/").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_category_is_a_field_error() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/productos/",
            json!({ "nombre": "Café", "precio": "10.00", "categoria": 42 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["categoria"].is_array());
    assert_eq!(app.store.product_count(), 0);
}

#[tokio::test]
async fn invalid_prices_are_rejected() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;

    for precio in ["-1.00", "1.234", "123456789.00"] {
        let (status, body) = app
            .post(
                "/api/productos/",
                json!({ "nombre": "Café", "precio": precio, "categoria": categoria }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "precio {precio}");
        assert!(body["errors"]["precio"].is_array(), "precio {precio}");
    }
}

#[tokio::test]
async fn fractional_json_numbers_are_accepted_as_prices() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;

    let (status, body) = app
        .post(
            "/api/productos/",
            json!({ "nombre": "Café", "precio": 35.1, "categoria": categoria }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["precio"], "35.10");

    let id = body["id"].as_i64().unwrap();
    let (status, body) = app
        .patch(&format!("/api/productos/{id}/"), json!({ "precio": 19.99 }))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["precio"], "19.99");
}

#[tokio::test]
async fn wrongly_typed_json_values_are_field_errors() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;

    let (status, body) = app
        .post(
            "/api/productos/",
            json!({ "nombre": "Café", "precio": "abc", "categoria": categoria }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["precio"].is_array(), "{body}");

    let (status, body) = app
        .post(
            "/api/productos/",
            json!({ "nombre": "Café", "precio": "10.00", "categoria": "x" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["categoria"].is_array(), "{body}");
}

#[tokio::test]
async fn blank_product_name_is_rejected() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;

    let (status, body) = app
        .post(
            "/api/productos/",
            json!({ "nombre": "   ", "precio": "10.00", "categoria": categoria }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["nombre"].is_array(), "{body}");
}

#[tokio::test]
async fn missing_required_fields_are_reported() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/productos/", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    for field in ["nombre", "precio", "categoria"] {
        assert!(body["errors"][field].is_array(), "{field}");
    }
}

#[tokio::test]
async fn put_replaces_and_patch_changes_only_given_fields() {
    let app = TestApp::new();
    let bebidas = app.category("Bebidas").await;
    let calientes = app.category("Calientes").await;
    let id = app.product("Café", "35.50", bebidas).await;

    let (status, body) = app
        .put(
            &format!("/api/productos/{id}/"),
            json!({
                "nombre": "Café americano",
                "descripcion": "Grande",
                "precio": "40",
                "categoria": calientes,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "Café americano");
    assert_eq!(body["categoria"]["nombre"], "Calientes");

    let (status, body) = app
        .patch(&format!("/api/productos/{id}/"), json!({ "precio": "42.10" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["precio"], "42.10");
    assert_eq!(body["nombre"], "Café americano");
    assert_eq!(body["descripcion"], "Grande");
}

#[tokio::test]
async fn delete_removes_the_product() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let id = app.product("Café", "35.50", categoria).await;

    let (status, _) = app.delete(&format!("/api/productos/{id}/")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/productos/{id}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/api/productos/{id}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn multipart_upload_stores_the_image() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let categoria_text = categoria.to_string();

    let body = multipart_body(
        &[
            ("nombre", "Horchata"),
            ("descripcion", "De arroz"),
            ("precio", "25.00"),
            ("categoria", &categoria_text),
        ],
        Some(("horchata.png", b"\x89PNG fake image")),
    );

    let (status, created) = app
        .request(multipart_request("POST", "/api/productos/", body))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");

    let url = created["imagen"].as_str().unwrap();
    assert!(url.starts_with("/media/productos/"), "{url}");
    assert!(url.ends_with(".png"), "{url}");

    let stored = app
        .media
        .path()
        .join(url.trim_start_matches("/media/"));
    assert_eq!(std::fs::read(stored).unwrap(), b"\x89PNG fake image");

    // Served back from the media mount.
    let response = app.get(url).await;
    assert_eq!(response.0, StatusCode::OK);
}

#[tokio::test]
async fn multipart_patch_without_file_keeps_the_image() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let categoria_text = categoria.to_string();

    let body = multipart_body(
        &[
            ("nombre", "Horchata"),
            ("precio", "25.00"),
            ("categoria", &categoria_text),
        ],
        Some(("horchata.jpg", b"jpeg")),
    );
    let (_, created) = app
        .request(multipart_request("POST", "/api/productos/", body))
        .await;
    let id = created["id"].as_i64().unwrap();

    let body = multipart_body(&[("precio", "27.50")], None);
    let (status, patched) = app
        .request(multipart_request("PATCH", &format!("/api/productos/{id}/"), body))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["precio"], "27.50");
    assert_eq!(patched["imagen"], created["imagen"]);
}

#[tokio::test]
async fn multipart_with_bad_number_is_a_field_error() {
    let app = TestApp::new();
    let categoria = app.category("Bebidas").await;
    let categoria_text = categoria.to_string();

    let body = multipart_body(
        &[
            ("nombre", "Horchata"),
            ("precio", "veinte"),
            ("categoria", &categoria_text),
        ],
        None,
    );
    let (status, body) = app
        .request(multipart_request("POST", "/api/productos/", body))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["precio"].is_array());
}
