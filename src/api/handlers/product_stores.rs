//! Handlers for the stores of a product.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use super::lookup_id;
use crate::api::dto::product::ProductResponse;
use crate::api::dto::product_store::StoreReference;
use crate::api::dto::store::StoreItem;
use crate::error::AppError;
use crate::state::AppState;

/// Associates a store with a product.
///
/// # Endpoint
///
/// `POST /api/products/{product_id}/stores/{store_id}`
///
/// Attaching a store twice records it twice.
///
/// # Errors
///
/// Returns 404 if the store or the product does not exist (store checked first).
pub async fn attach_store_handler(
    Path((product_id, store_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = state
        .product_store_service
        .attach_store(lookup_id(&product_id), lookup_id(&store_id))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Lists the stores of a product.
///
/// # Endpoint
///
/// `GET /api/products/{product_id}/stores`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn list_product_stores_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<StoreItem>>, AppError> {
    let stores = state
        .product_store_service
        .list_stores(lookup_id(&product_id))
        .await?;

    Ok(Json(stores.into_iter().map(StoreItem::from).collect()))
}

/// Returns one store of a product.
///
/// # Endpoint
///
/// `GET /api/products/{product_id}/stores/{store_id}`
///
/// # Errors
///
/// Returns 404 if the store or the product does not exist.
/// Returns 412 if the store is not associated with the product.
pub async fn get_product_store_handler(
    Path((product_id, store_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<StoreItem>, AppError> {
    let store = state
        .product_store_service
        .get_store(lookup_id(&product_id), lookup_id(&store_id))
        .await?;

    Ok(Json(store.into()))
}

/// Replaces every store of a product.
///
/// # Endpoint
///
/// `PUT /api/products/{product_id}/stores`
///
/// # Request Body
///
/// ```json
/// [{ "id": "0b7c…" }, { "id": "5d21…" }]
/// ```
///
/// # Errors
///
/// Returns 404 if the product or any listed store does not exist. Nothing is
/// changed in that case.
pub async fn replace_product_stores_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<Vec<StoreReference>>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Json(payload) = payload?;
    let store_ids: Vec<_> = payload.iter().map(|s| lookup_id(&s.id)).collect();

    let product = state
        .product_store_service
        .replace_stores(lookup_id(&product_id), &store_ids)
        .await?;

    Ok(Json(product.into()))
}

/// Removes a store from a product.
///
/// # Endpoint
///
/// `DELETE /api/products/{product_id}/stores/{store_id}`
///
/// # Errors
///
/// Returns 404 if the store or the product does not exist.
/// Returns 412 if the store is not associated with the product.
pub async fn detach_store_handler(
    Path((product_id, store_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .product_store_service
        .detach_store(lookup_id(&product_id), lookup_id(&store_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
