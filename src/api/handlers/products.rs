//! Handlers for product endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use super::lookup_id;
use crate::api::dto::product::{ProductRequest, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all products with their stores.
///
/// # Endpoint
///
/// `GET /api/products`
pub async fn product_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.find_all().await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Creates a product.
///
/// # Endpoint
///
/// `POST /api/products`
///
/// # Request Body
///
/// ```json
/// { "name": "Leche", "price": "4200", "type": "Perecedero" }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is missing or empty or the type is not `Perecedero` / `No perecedero`.
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let product = state.product_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Returns one product with its stores.
///
/// # Endpoint
///
/// `GET /api/products/{product_id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn get_product_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .product_service
        .find_one(lookup_id(&product_id))
        .await?;

    Ok(Json(product.into()))
}

/// Replaces the fields of a product. Its stores are kept.
///
/// # Endpoint
///
/// `PUT /api/products/{product_id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
/// Returns 400 if a field is missing or empty or the type is not accepted.
pub async fn update_product_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let product = state
        .product_service
        .update(lookup_id(&product_id), payload.into())
        .await?;

    Ok(Json(product.into()))
}

/// Deletes a product and its store associations.
///
/// # Endpoint
///
/// `DELETE /api/products/{product_id}`
///
/// # Errors
///
/// Returns 404 if the product does not exist.
pub async fn delete_product_handler(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .product_service
        .delete(lookup_id(&product_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
