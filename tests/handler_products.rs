mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

const PRODUCT_NOT_FOUND: &str = "the product with the given id was not found";

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_product_success() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Leche", "price": "4200", "type": "Perecedero" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert!(Uuid::parse_str(json["id"].as_str().unwrap()).is_ok());
    assert_eq!(json["name"], "Leche");
    assert_eq!(json["price"], "4200");
    assert_eq!(json["type"], "Perecedero");
    assert_eq!(json["stores"], json!([]));
}

#[tokio::test]
async fn test_create_product_non_perishable() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Arroz", "price": "3000", "type": "No perecedero" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["type"], "No perecedero");
}

#[tokio::test]
async fn test_create_product_invalid_type() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Leche", "price": "4200", "type": "perecedero" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_argument");
    assert_eq!(
        common::error_message(&json),
        "the product type given was not correct"
    );

    assert!(state.product_service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_product_empty_name() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "", "price": "4200", "type": "Perecedero" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_create_product_missing_type() {
    let state = common::create_test_state();
    let server = common::make_server(state.clone());

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Leche", "price": "4200" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(
        json["error"]["details"]["error"]
            .as_str()
            .unwrap()
            .contains("type")
    );

    assert!(state.product_service.find_all().await.unwrap().is_empty());
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_product_returns_created() {
    let state = common::create_test_state();
    let product = common::create_test_product(&state, "Pan").await;
    let server = common::make_server(state);

    let response = server.get(&format!("/api/products/{}", product.id)).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], product.id.to_string());
    assert_eq!(json["name"], "Pan");
}

#[tokio::test]
async fn test_get_product_not_found() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .get(&format!("/api/products/{}", Uuid::new_v4()))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        common::error_message(&response.json::<serde_json::Value>()),
        PRODUCT_NOT_FOUND
    );
}

#[tokio::test]
async fn test_get_product_malformed_id_is_not_found() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/api/products/not-a-uuid").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_list_products() {
    let state = common::create_test_state();
    common::create_test_product(&state, "Pan").await;
    common::create_test_product(&state, "Queso").await;
    let server = common::make_server(state);

    let response = server.get("/api/products").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().any(|p| p["name"] == "Pan"));
    assert!(items.iter().any(|p| p["name"] == "Queso"));
}

#[tokio::test]
async fn test_list_products_empty() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/api/products").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_product_keeps_id_and_stores() {
    let state = common::create_test_state();
    let product = common::create_test_product(&state, "Pan").await;
    let store = common::create_test_store(&state, "Centro").await;
    common::attach(&state, product.id, store.id).await;
    let server = common::make_server(state);

    let response = server
        .put(&format!("/api/products/{}", product.id))
        .json(&json!({ "name": "Pan integral", "price": "2500", "type": "No perecedero" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], product.id.to_string());
    assert_eq!(json["name"], "Pan integral");
    assert_eq!(json["price"], "2500");
    assert_eq!(json["type"], "No perecedero");
    assert_eq!(json["stores"][0]["id"], store.id.to_string());
}

#[tokio::test]
async fn test_update_product_invalid_type_leaves_record() {
    let state = common::create_test_state();
    let product = common::create_test_product(&state, "Pan").await;
    let server = common::make_server(state.clone());

    let response = server
        .put(&format!("/api/products/{}", product.id))
        .json(&json!({ "name": "Otro", "price": "1", "type": "Congelado" }))
        .await;

    response.assert_status_bad_request();

    let stored = state.product_service.find_one(product.id).await.unwrap();
    assert_eq!(stored.name, "Pan");
}

#[tokio::test]
async fn test_update_product_not_found_wins_over_invalid_type() {
    let server = common::make_server(common::create_test_state());

    let response = server
        .put(&format!("/api/products/{}", Uuid::new_v4()))
        .json(&json!({ "name": "Otro", "price": "1", "type": "Congelado" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_product() {
    let state = common::create_test_state();
    let product = common::create_test_product(&state, "Pan").await;
    let server = common::make_server(state);

    server
        .delete(&format!("/api/products/{}", product.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/products/{}", product.id))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_product_twice() {
    let state = common::create_test_state();
    let product = common::create_test_product(&state, "Pan").await;
    let server = common::make_server(state);

    server
        .delete(&format!("/api/products/{}", product.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server
        .delete(&format!("/api/products/{}", product.id))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        common::error_message(&response.json::<serde_json::Value>()),
        PRODUCT_NOT_FOUND
    );
}
