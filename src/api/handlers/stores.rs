//! Handlers for store endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use super::lookup_id;
use crate::api::dto::store::{StoreRequest, StoreResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all stores with the products that reference them.
///
/// # Endpoint
///
/// `GET /api/stores`
pub async fn store_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoreResponse>>, AppError> {
    let stores = state.store_service.find_all().await?;

    Ok(Json(stores.into_iter().map(StoreResponse::from).collect()))
}

/// Creates a store.
///
/// # Endpoint
///
/// `POST /api/stores`
///
/// # Errors
///
/// Returns 400 if a field is missing or empty or `city` is not exactly 3 characters.
pub async fn create_store_handler(
    State(state): State<AppState>,
    payload: Result<Json<StoreRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StoreResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let store = state.store_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(store.into())))
}

/// Returns one store.
///
/// # Endpoint
///
/// `GET /api/stores/{store_id}`
///
/// # Errors
///
/// Returns 404 if the store does not exist.
pub async fn get_store_handler(
    Path(store_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StoreResponse>, AppError> {
    let store = state.store_service.find_one(lookup_id(&store_id)).await?;

    Ok(Json(store.into()))
}

/// Replaces the fields of a store.
///
/// # Endpoint
///
/// `PUT /api/stores/{store_id}`
///
/// # Errors
///
/// Returns 404 if the store does not exist.
/// Returns 400 if a field is missing or empty or `city` is not exactly 3 characters.
pub async fn update_store_handler(
    Path(store_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<StoreRequest>, JsonRejection>,
) -> Result<Json<StoreResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let store = state
        .store_service
        .update(lookup_id(&store_id), payload.into())
        .await?;

    Ok(Json(store.into()))
}

/// Deletes a store. Products that listed it lose the association.
///
/// # Endpoint
///
/// `DELETE /api/stores/{store_id}`
///
/// # Errors
///
/// Returns 404 if the store does not exist.
pub async fn delete_store_handler(
    Path(store_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.store_service.delete(lookup_id(&store_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
