#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use product_store::api::handlers::health_handler;
use product_store::api::routes::api_routes;
use product_store::domain::entities::{NewProduct, NewStore, Product, Store};
use product_store::state::AppState;
use uuid::Uuid;

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_product(state: &AppState, name: &str) -> Product {
    state
        .product_service
        .create(NewProduct {
            name: name.to_string(),
            price: "1000".to_string(),
            product_type: "Perecedero".to_string(),
        })
        .await
        .unwrap()
}

pub async fn create_test_store(state: &AppState, name: &str) -> Store {
    state
        .store_service
        .create(NewStore {
            name: name.to_string(),
            city: "BOG".to_string(),
            address: format!("{name} street 1"),
        })
        .await
        .unwrap()
}

pub async fn attach(state: &AppState, product_id: Uuid, store_id: Uuid) {
    state
        .product_store_service
        .attach_store(product_id, store_id)
        .await
        .unwrap();
}

pub fn error_message(json: &serde_json::Value) -> &str {
    json["error"]["message"].as_str().unwrap_or_default()
}
